use serde::{Deserialize, Serialize};

/// Section sentinel for content before the first `## ` heading.
pub const SECTION_TOP: &str = "(top)";

/// Section sentinel for a document indexed as a single chunk.
pub const SECTION_FULL_FILE: &str = "(full file)";

/// One indexed unit of text, usually one markdown section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Dense sequential id, reassigned on every index write.
    pub id: usize,

    /// Owning document path, relative to the knowledge-base root.
    pub file: String,

    /// Section title, or one of the sentinels.
    pub section: String,

    /// Start line (1-indexed).
    pub line_start: usize,

    /// End line (1-indexed, inclusive, counted before trimming).
    pub line_end: usize,

    /// Trimmed section text. Never empty.
    pub text: String,

    /// Embedding vector, absent until computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Chunk {
    /// Number of raw lines covered by this chunk.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_end.saturating_sub(self.line_start) + 1
    }

    /// Check if an embedding has been computed for this chunk.
    #[must_use]
    pub const fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}
