use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::TmdbConfig;
use crate::models::content::{
    ContentRecord, ContentSummary, ContentType, GenreRef, MovieRecord, TvShowRecord,
};
use crate::services::ingest::{CatalogFetcher, IngestError};

const SERVICE: &str = "TMDB";

#[derive(Debug, Deserialize)]
struct PopularPage {
    results: Vec<SummaryRow>,
}

#[derive(Debug, Deserialize)]
struct SummaryRow {
    id: i64,
    // Movies carry `title`, TV shows carry `name`.
    title: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreRow {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MovieDetailsRow {
    id: i64,
    title: String,
    release_date: Option<String>,
    popularity: f64,
    vote_average: f64,
    vote_count: i64,
    budget: i64,
    revenue: i64,
    #[serde(default)]
    genres: Vec<GenreRow>,
}

#[derive(Debug, Deserialize)]
struct TvDetailsRow {
    id: i64,
    name: String,
    first_air_date: Option<String>,
    popularity: f64,
    vote_average: f64,
    vote_count: i64,
    #[serde(default)]
    genres: Vec<GenreRow>,
}

// Unreleased items report the date as an empty string.
fn normalize_date(date: Option<String>) -> Option<String> {
    date.filter(|d| !d.is_empty())
}

fn map_genres(genres: Vec<GenreRow>) -> Vec<GenreRef> {
    genres
        .into_iter()
        .map(|g| GenreRef {
            id: g.id,
            name: g.name,
        })
        .collect()
}

impl From<MovieDetailsRow> for MovieRecord {
    fn from(row: MovieDetailsRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            release_date: normalize_date(row.release_date),
            popularity: row.popularity,
            vote_average: row.vote_average,
            vote_count: row.vote_count,
            budget: row.budget,
            revenue: row.revenue,
            genres: map_genres(row.genres),
        }
    }
}

impl From<TvDetailsRow> for TvShowRecord {
    fn from(row: TvDetailsRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            first_air_date: normalize_date(row.first_air_date),
            popularity: row.popularity,
            vote_average: row.vote_average,
            vote_count: row.vote_count,
            genres: map_genres(row.genres),
        }
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    #[must_use]
    pub fn new(config: &TmdbConfig, api_key: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("trendarr/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        page: Option<u32>,
    ) -> Result<T, IngestError> {
        let mut request = self.client.get(url).query(&[
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ]);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IngestError::remote(SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::remote(
                SERVICE,
                format!("{status} - {body}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| IngestError::remote(SERVICE, e.to_string()))
    }
}

#[async_trait]
impl CatalogFetcher for TmdbClient {
    async fn list_popular(
        &self,
        content: ContentType,
        page: u32,
    ) -> Result<Vec<ContentSummary>, IngestError> {
        let url = format!("{}/{}/popular", self.base_url, content.endpoint());
        let listing: PopularPage = self.get_json(&url, Some(page)).await?;

        Ok(listing
            .results
            .into_iter()
            .map(|row| ContentSummary {
                id: row.id,
                title: row.title.or(row.name).unwrap_or_default(),
            })
            .collect())
    }

    async fn fetch_details(
        &self,
        content: ContentType,
        id: i64,
    ) -> Result<ContentRecord, IngestError> {
        let url = format!("{}/{}/{}", self.base_url, content.endpoint(), id);

        match content {
            ContentType::Movie => {
                let row: MovieDetailsRow = self.get_json(&url, None).await?;
                Ok(ContentRecord::Movie(row.into()))
            }
            ContentType::Tv => {
                let row: TvDetailsRow = self.get_json(&url, None).await?;
                Ok(ContentRecord::Tv(row.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_details_deserialize_and_convert() {
        let raw = serde_json::json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "popularity": 83.5,
            "vote_average": 8.4,
            "vote_count": 34495,
            "budget": 160_000_000_i64,
            "revenue": 825_532_764_i64,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"}
            ]
        });

        let row: MovieDetailsRow = serde_json::from_value(raw).unwrap();
        let movie = MovieRecord::from(row);

        assert_eq!(movie.id, 27205);
        assert_eq!(movie.release_date.as_deref(), Some("2010-07-15"));
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.genres[1].name, "Science Fiction");
    }

    #[test]
    fn empty_release_date_becomes_none() {
        let raw = serde_json::json!({
            "id": 1,
            "title": "Unreleased",
            "release_date": "",
            "popularity": 1.0,
            "vote_average": 0.0,
            "vote_count": 0,
            "budget": 0,
            "revenue": 0
        });

        let row: MovieDetailsRow = serde_json::from_value(raw).unwrap();
        let movie = MovieRecord::from(row);

        assert!(movie.release_date.is_none());
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn summary_rows_read_title_or_name() {
        let raw = serde_json::json!({
            "results": [
                {"id": 27205, "title": "Inception"},
                {"id": 1399, "name": "Game of Thrones"}
            ]
        });

        let page: PopularPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page.results[0].title.as_deref(), Some("Inception"));
        assert_eq!(page.results[1].name.as_deref(), Some("Game of Thrones"));
    }
}
