pub mod genre;
pub mod movie;
pub mod tv_show;

/// Rows actually written by one per-item transaction. A zero component means
/// the corresponding rows were already present and were left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordedRows {
    pub content: u64,
    pub genres: u64,
    pub links: u64,
}
