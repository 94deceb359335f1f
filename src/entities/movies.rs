use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    /// External catalog id, never locally generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub budget: i64,
    pub revenue: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_genres::Entity")]
    MovieGenres,
}

impl Related<super::movie_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieGenres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
