use crate::types::{Chunk, SECTION_FULL_FILE, SECTION_TOP};

/// Prefix that starts a new section chunk.
const HEADING_PREFIX: &str = "## ";

/// Splits markdown documents into section chunks.
pub struct MarkdownChunker;

impl MarkdownChunker {
    /// Chunk a document into ordered sections.
    ///
    /// Every `## ` heading starts a new chunk, with the heading line as its
    /// first line. Content before the first heading becomes a `(top)` chunk.
    /// Chunks whose trimmed text is empty are dropped. A document that yields
    /// no section chunks is emitted as a single `(full file)` chunk covering
    /// every line, provided its trimmed text is non-empty.
    #[must_use]
    pub fn chunk(file: &str, text: &str) -> Vec<Chunk> {
        let lines: Vec<&str> = text.split('\n').collect();

        let mut chunks = Vec::new();
        let mut section: Option<String> = None;
        let mut buffer: Vec<&str> = Vec::new();
        let mut start = 1;

        for (i, &line) in lines.iter().enumerate() {
            if line.starts_with(HEADING_PREFIX) {
                flush(&mut chunks, file, section.as_deref(), start, &buffer);
                section = Some(heading_title(line));
                buffer = vec![line];
                start = i + 1;
            } else {
                buffer.push(line);
            }
        }
        flush(&mut chunks, file, section.as_deref(), start, &buffer);

        if chunks.is_empty() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                chunks.push(Chunk {
                    id: 0,
                    file: file.to_string(),
                    section: SECTION_FULL_FILE.to_string(),
                    line_start: 1,
                    line_end: lines.len(),
                    text: trimmed.to_string(),
                    embedding: None,
                });
            }
        }

        chunks
    }
}

/// Heading text with leading `#`/space characters and surrounding whitespace
/// stripped.
fn heading_title(line: &str) -> String {
    line.trim_start_matches(['#', ' ']).trim().to_string()
}

fn flush(chunks: &mut Vec<Chunk>, file: &str, section: Option<&str>, start: usize, raw: &[&str]) {
    if raw.is_empty() {
        return;
    }
    let text = raw.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    chunks.push(Chunk {
        id: 0,
        file: file.to_string(),
        section: section.unwrap_or(SECTION_TOP).to_string(),
        line_start: start,
        line_end: start + raw.len() - 1,
        text: trimmed.to_string(),
        embedding: None,
    });
}
