use crate::entities::prelude::*;
use crate::entities::{tv_show_genres, tv_shows};
use crate::models::content::TvShowRecord;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};

use super::RecordedRows;
use super::genre;

pub struct TvShowRepository {
    conn: DatabaseConnection,
}

impl TvShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Writes the show, its genres, and their associations in one
    /// transaction, committed before returning. Every insert is keyed on the
    /// external id and skips rows that already exist.
    pub async fn record(&self, show: &TvShowRecord) -> Result<RecordedRows, DbErr> {
        let txn = self.conn.begin().await?;

        let active_model = tv_shows::ActiveModel {
            tv_id: Set(show.id),
            name: Set(show.name.clone()),
            first_air_date: Set(show.first_air_date.clone()),
            popularity: Set(show.popularity),
            vote_average: Set(show.vote_average),
            vote_count: Set(show.vote_count),
        };

        let mut rows = RecordedRows::default();
        rows.content = TvShows::insert(active_model)
            .on_conflict(
                OnConflict::column(tv_shows::Column::TvId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        for genre in &show.genres {
            rows.genres += genre::insert_if_absent(&txn, genre).await?;

            let link = tv_show_genres::ActiveModel {
                tv_id: Set(show.id),
                genre_id: Set(genre.id),
            };
            rows.links += TvShowGenres::insert(link)
                .on_conflict(
                    OnConflict::columns([
                        tv_show_genres::Column::TvId,
                        tv_show_genres::Column::GenreId,
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
        TvShows::find().count(&self.conn).await
    }

    pub async fn link_count(&self) -> Result<u64, DbErr> {
        TvShowGenres::find().count(&self.conn).await
    }
}
