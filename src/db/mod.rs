use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::genres;
use crate::models::content::{MovieRecord, TvShowRecord};

pub mod migrator;
pub mod repositories;

pub use repositories::RecordedRows;

/// Row counts for the five collected tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableCounts {
    pub movies: u64,
    pub tv_shows: u64,
    pub genres: u64,
    pub movie_genres: u64,
    pub tv_show_genres: u64,
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    /// Opens the store, creating the database file and schema if absent.
    ///
    /// The pool is pinned to a single connection: the collector is the only
    /// writer and owns the store for the process lifetime.
    pub async fn new(db_url: &str) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!("Database connected & schema ensured");

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn tv_show_repo(&self) -> repositories::tv_show::TvShowRepository {
        repositories::tv_show::TvShowRepository::new(self.conn.clone())
    }

    fn genre_repo(&self) -> repositories::genre::GenreRepository {
        repositories::genre::GenreRepository::new(self.conn.clone())
    }

    pub async fn record_movie(&self, movie: &MovieRecord) -> Result<RecordedRows, DbErr> {
        self.movie_repo().record(movie).await
    }

    pub async fn record_tv_show(&self, show: &TvShowRecord) -> Result<RecordedRows, DbErr> {
        self.tv_show_repo().record(show).await
    }

    pub async fn list_genres(&self) -> Result<Vec<genres::Model>, DbErr> {
        self.genre_repo().list().await
    }

    pub async fn table_counts(&self) -> Result<TableCounts, DbErr> {
        Ok(TableCounts {
            movies: self.movie_repo().count().await?,
            tv_shows: self.tv_show_repo().count().await?,
            genres: self.genre_repo().count().await?,
            movie_genres: self.movie_repo().link_count().await?,
            tv_show_genres: self.tv_show_repo().link_count().await?,
        })
    }
}
