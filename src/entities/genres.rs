use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub genre_id: i64,
    #[sea_orm(unique)]
    pub genre_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_genres::Entity")]
    MovieGenres,
    #[sea_orm(has_many = "super::tv_show_genres::Entity")]
    TvShowGenres,
}

impl Related<super::movie_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieGenres.def()
    }
}

impl Related<super::tv_show_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TvShowGenres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
