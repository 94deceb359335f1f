use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which pair of catalog endpoints and tables an ingestion pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

impl ContentType {
    pub const ALL: [Self; 2] = [Self::Movie, Self::Tv];

    /// Path segment used by both the popular listing and the detail lookup.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// One row of a popular listing page. The summary only carries enough to
/// drive the detail lookup; movies lack budget/revenue and the genre
/// breakdown until the full record is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub budget: i64,
    pub revenue: i64,
    pub genres: Vec<GenreRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowRecord {
    pub id: i64,
    pub name: String,
    pub first_air_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub genres: Vec<GenreRef>,
}

/// Authoritative full record returned by a detail lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentRecord {
    Movie(MovieRecord),
    Tv(TvShowRecord),
}

impl ContentRecord {
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Movie(movie) => movie.id,
            Self::Tv(show) => show.id,
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Movie(_) => ContentType::Movie,
            Self::Tv(_) => ContentType::Tv,
        }
    }

    #[must_use]
    pub fn genres(&self) -> &[GenreRef] {
        match self {
            Self::Movie(movie) => &movie.genres,
            Self::Tv(show) => &show.genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_matches_api_path_segment() {
        assert_eq!(ContentType::Movie.endpoint(), "movie");
        assert_eq!(ContentType::Tv.endpoint(), "tv");
        assert_eq!(ContentType::Tv.to_string(), "tv");
    }

    #[test]
    fn record_accessors_cover_both_variants() {
        let record = ContentRecord::Tv(TvShowRecord {
            id: 1399,
            name: "Game of Thrones".to_string(),
            first_air_date: Some("2011-04-17".to_string()),
            popularity: 369.6,
            vote_average: 8.4,
            vote_count: 21857,
            genres: vec![GenreRef {
                id: 18,
                name: "Drama".to_string(),
            }],
        });

        assert_eq!(record.id(), 1399);
        assert_eq!(record.content_type(), ContentType::Tv);
        assert_eq!(record.genres().len(), 1);
    }
}
