pub mod ingest;
pub use ingest::{CatalogFetcher, IngestError, IngestReport, IngestService, RequestGate};
