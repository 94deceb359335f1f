//! Ingestion pipeline: paginate the popular listings, resolve full details
//! per item, and upsert each record into the store before moving on.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::db::{RecordedRows, Store};
use crate::models::content::{ContentRecord, ContentSummary, ContentType};

/// Items between progress log lines.
const PROGRESS_EVERY: u64 = 10;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{service} error: {message}")]
    Remote { service: String, message: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl IngestError {
    pub fn remote(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            service: service.into(),
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for IngestError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Read seam over the remote catalog. Both calls are stateless one-shot
/// requests; any non-success response surfaces as [`IngestError::Remote`]
/// and the caller does not retry.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// One page of the popular listing for `content`. Pages are 1-based.
    async fn list_popular(
        &self,
        content: ContentType,
        page: u32,
    ) -> Result<Vec<ContentSummary>, IngestError>;

    /// Authoritative full record for one item, including its genre list.
    async fn fetch_details(
        &self,
        content: ContentType,
        id: i64,
    ) -> Result<ContentRecord, IngestError>;
}

/// Fixed-interval gate between outbound requests. A single blocking sleep is
/// enough at this volume (at most 200 detail fetches per run); no token
/// bucket, no adaptive backoff.
pub struct RequestGate {
    delay: Duration,
}

impl RequestGate {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Outcome of one ingestion pass over a content type.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestReport {
    pub items: u64,
    pub new_content: u64,
    pub new_genres: u64,
    pub new_links: u64,
}

impl IngestReport {
    fn absorb(&mut self, rows: RecordedRows) {
        self.items += 1;
        self.new_content += rows.content;
        self.new_genres += rows.genres;
        self.new_links += rows.links;
    }
}

pub struct IngestService {
    store: Store,
    fetcher: Arc<dyn CatalogFetcher>,
    gate: RequestGate,
    pages: u32,
}

impl IngestService {
    #[must_use]
    pub fn new(store: Store, fetcher: Arc<dyn CatalogFetcher>, gate: RequestGate, pages: u32) -> Self {
        Self {
            store,
            fetcher,
            gate,
            pages,
        }
    }

    /// Runs one full pass for `content`: every popular page in order, every
    /// item's details, one committed transaction per item. The first remote
    /// or storage failure aborts the pass; already-committed items survive
    /// and a re-run skips them.
    pub async fn ingest(&self, content: ContentType) -> Result<IngestReport, IngestError> {
        info!(
            "Collecting popular {} items (pages 1..={})",
            content, self.pages
        );

        let mut report = IngestReport::default();

        for page in 1..=self.pages {
            let summaries = self.fetcher.list_popular(content, page).await?;
            debug!("{} page {}: {} summaries", content, page, summaries.len());

            for summary in summaries {
                let record = self.fetcher.fetch_details(content, summary.id).await?;
                debug!("fetched {} {} ({})", record.content_type(), record.id(), summary.title);

                let rows = match &record {
                    ContentRecord::Movie(movie) => self.store.record_movie(movie).await?,
                    ContentRecord::Tv(show) => self.store.record_tv_show(show).await?,
                };

                report.absorb(rows);
                if report.items % PROGRESS_EVERY == 0 {
                    info!("{}: {} items ingested", content, report.items);
                }

                self.gate.pause().await;
            }
        }

        info!(
            "{} pass done: {} items, {} new rows, {} new genres, {} new links",
            content, report.items, report.new_content, report.new_genres, report.new_links
        );

        Ok(report)
    }
}
