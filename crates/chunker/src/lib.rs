//! # KB Chunker
//!
//! Section-level chunking for markdown documents.
//!
//! Documents are split on level-2 headings (`## `); each section becomes one
//! chunk carrying its title, 1-indexed line range, and trimmed text. Content
//! before the first heading becomes a `(top)` chunk, and a document without
//! any headings becomes a single `(full file)` chunk.
//!
//! ## Example
//!
//! ```
//! use kb_chunker::MarkdownChunker;
//!
//! let text = "intro\n\n## Setup\nsteps here\n";
//! let chunks = MarkdownChunker::chunk("guide.md", text);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].section, "(top)");
//! assert_eq!(chunks[1].section, "Setup");
//! ```

mod markdown;
mod types;

pub use markdown::MarkdownChunker;
pub use types::{Chunk, SECTION_FULL_FILE, SECTION_TOP};
