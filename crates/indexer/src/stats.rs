use serde::{Deserialize, Serialize};

/// Statistics for one indexing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Markdown files discovered in the corpus
    pub files: usize,

    /// Files re-chunked because they are new or their fingerprint changed
    pub files_changed: usize,

    /// Files dropped since the previous build
    pub files_deleted: usize,

    /// Chunks in the written index
    pub chunks: usize,

    /// Chunks embedded during this run
    pub chunks_embedded: usize,

    /// True when nothing changed and the artifact was left untouched
    pub skipped: bool,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl IndexStats {
    /// Stats for a run skipped because the index was already up to date.
    #[must_use]
    pub fn up_to_date(files: usize, time_ms: u64) -> Self {
        Self {
            files,
            skipped: true,
            time_ms,
            ..Self::default()
        }
    }
}
