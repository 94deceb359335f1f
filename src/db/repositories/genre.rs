use crate::entities::genres;
use crate::entities::prelude::*;
use crate::models::content::GenreRef;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

/// Insert-if-absent keyed on the external genre id. Returns the number of
/// rows written (0 when the genre already exists).
pub(crate) async fn insert_if_absent<C: ConnectionTrait>(
    conn: &C,
    genre: &GenreRef,
) -> Result<u64, DbErr> {
    let active_model = genres::ActiveModel {
        genre_id: Set(genre.id),
        genre_name: Set(genre.name.clone()),
    };

    Genres::insert(active_model)
        .on_conflict(
            OnConflict::column(genres::Column::GenreId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

pub struct GenreRepository {
    conn: DatabaseConnection,
}

impl GenreRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<genres::Model>, DbErr> {
        Genres::find()
            .order_by_asc(genres::Column::GenreName)
            .all(&self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Genres::find().count(&self.conn).await
    }
}
