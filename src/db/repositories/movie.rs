use crate::entities::prelude::*;
use crate::entities::{movie_genres, movies};
use crate::models::content::MovieRecord;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};

use super::RecordedRows;
use super::genre;

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Writes the movie, its genres, and their associations in one
    /// transaction, committed before returning. Every insert is keyed on the
    /// external id and skips rows that already exist.
    pub async fn record(&self, movie: &MovieRecord) -> Result<RecordedRows, DbErr> {
        let txn = self.conn.begin().await?;

        let active_model = movies::ActiveModel {
            movie_id: Set(movie.id),
            title: Set(movie.title.clone()),
            release_date: Set(movie.release_date.clone()),
            popularity: Set(movie.popularity),
            vote_average: Set(movie.vote_average),
            vote_count: Set(movie.vote_count),
            budget: Set(movie.budget),
            revenue: Set(movie.revenue),
        };

        let mut rows = RecordedRows::default();
        rows.content = Movies::insert(active_model)
            .on_conflict(
                OnConflict::column(movies::Column::MovieId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        for genre in &movie.genres {
            rows.genres += genre::insert_if_absent(&txn, genre).await?;

            let link = movie_genres::ActiveModel {
                movie_id: Set(movie.id),
                genre_id: Set(genre.id),
            };
            rows.links += MovieGenres::insert(link)
                .on_conflict(
                    OnConflict::columns([
                        movie_genres::Column::MovieId,
                        movie_genres::Column::GenreId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Movies::find().count(&self.conn).await
    }

    pub async fn link_count(&self) -> Result<u64, DbErr> {
        MovieGenres::find().count(&self.conn).await
    }
}
