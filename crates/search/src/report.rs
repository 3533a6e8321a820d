use crate::merge::ScoredResult;

const REPORT_BANNER: &str = "=== KB SEARCH RESULTS ===";

/// Longest excerpt shown per chunk, in characters.
const EXCERPT_MAX_CHARS: usize = 500;

/// Most excerpt lines shown per chunk.
const EXCERPT_MAX_LINES: usize = 10;

/// Render ranked results as a structured text report.
///
/// A summary table first, then one excerpt block per result, then the
/// distinct files referenced in first-seen order.
#[must_use]
pub fn render_report(results: &[ScoredResult]) -> String {
    if results.is_empty() {
        return format!("{REPORT_BANNER}\n\nNo results found.");
    }

    let mut lines = vec![format!("{REPORT_BANNER}\n")];

    lines.push("## Summary".to_string());
    lines.push("| File | Section | Keyword Hits | Semantic Score |".to_string());
    lines.push("|------|---------|-------------|----------------|".to_string());
    for result in results {
        let hits = result
            .keyword_hits
            .iter()
            .map(|(term, count)| format!("{term}({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "| {} | {} | {} | {:.2} |",
            result.chunk.file, result.chunk.section, hits, result.semantic_score
        ));
    }

    lines.push("\n## Top Chunks\n".to_string());

    for (rank, result) in results.iter().enumerate() {
        let keyword_part = if result.keyword_hits.is_empty() {
            String::new()
        } else {
            let parts = result
                .keyword_hits
                .iter()
                .map(|(term, count)| format!("{term}\u{d7}{count}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("keyword: {parts}, ")
        };
        lines.push(format!(
            "[{}] {} \u{a7}{} [L{}-L{}] ({}semantic: {:.2})",
            rank + 1,
            result.chunk.file,
            result.chunk.section,
            result.chunk.line_start,
            result.chunk.line_end,
            keyword_part,
            result.semantic_score
        ));

        let excerpt = truncate_chars(&result.chunk.text, EXCERPT_MAX_CHARS);
        for line in excerpt.split('\n').take(EXCERPT_MAX_LINES) {
            lines.push(format!("> {line}"));
        }
        lines.push(String::new());
    }

    let mut files_seen: Vec<&str> = Vec::new();
    for result in results {
        if !files_seen.contains(&result.chunk.file.as_str()) {
            files_seen.push(&result.chunk.file);
        }
    }
    lines.push(format!(
        "---\nFiles to consider reading in full: {}",
        files_seen.join(", ")
    ));

    lines.join("\n")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
