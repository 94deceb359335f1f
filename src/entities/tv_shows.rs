use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tv_shows")]
pub struct Model {
    /// External catalog id, never locally generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub tv_id: i64,
    pub name: String,
    pub first_air_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tv_show_genres::Entity")]
    TvShowGenres,
}

impl Related<super::tv_show_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TvShowGenres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
