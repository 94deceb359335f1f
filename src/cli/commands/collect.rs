//! Collect command handler - runs the full ingestion pipeline.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::tmdb::TmdbClient;
use crate::config::{API_KEY_ENV, Config};
use crate::db::Store;
use crate::models::content::ContentType;
use crate::services::ingest::{IngestError, IngestService, RequestGate};

pub async fn cmd_collect(
    config: &Config,
    content: Option<ContentType>,
    pages: Option<u32>,
) -> anyhow::Result<()> {
    // The credential check happens before any network or store activity.
    let api_key = config.tmdb.resolve_api_key().ok_or_else(|| {
        IngestError::Configuration(format!("{API_KEY_ENV} is not set and [tmdb].api_key is empty"))
    })?;

    let store = Store::new(&config.general.database_path).await?;
    let fetcher = Arc::new(TmdbClient::new(&config.tmdb, api_key));
    let gate = RequestGate::new(Duration::from_millis(config.collector.request_delay_ms));
    let pages = pages.unwrap_or(config.collector.pages_per_type);

    let service = IngestService::new(store, fetcher, gate, pages);

    let targets = content.map_or_else(|| ContentType::ALL.to_vec(), |c| vec![c]);

    for content in targets {
        let report = service.ingest(content).await?;
        println!(
            "{}: {} items ingested ({} new, {} new genres, {} new links)",
            content, report.items, report.new_content, report.new_genres, report.new_links
        );
    }

    Ok(())
}
