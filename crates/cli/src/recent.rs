use anyhow::{bail, Result};
use chrono::{Days, Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Default lookback window for daily entries.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Render daily entries from `dir` no older than `days`, newest first.
///
/// Entries are files named `YYYY-MM-DD.md`; names starting with `_` or not
/// parseable as a date are silently skipped. Entry contents are joined with
/// a `---` divider. A missing directory is an error.
pub fn render_recent(dir: &Path, days: u32) -> Result<String> {
    if !dir.is_dir() {
        bail!("no {} directory found", dir.display());
    }

    let today = Local::now().date_naive();
    render_recent_since(dir, today, days)
}

fn render_recent_since(dir: &Path, today: NaiveDate, days: u32) -> Result<String> {
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    let mut entries: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with('_') {
            continue;
        }
        let Some(stem) = name.strip_suffix(".md") else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") else {
            continue;
        };
        if date >= cutoff {
            entries.push((date, entry.path()));
        }
    }

    entries.sort_by(|a, b| b.0.cmp(&a.0));

    let mut contents = Vec::with_capacity(entries.len());
    for (_, path) in &entries {
        let text = fs::read_to_string(path)?;
        contents.push(text.trim_end().to_string());
    }

    Ok(contents.join("\n\n---\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn entries_render_newest_first_with_dividers() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("2026-08-01.md"), "older entry\n").unwrap();
        fs::write(temp.path().join("2026-08-03.md"), "newer entry\n").unwrap();

        let report = render_recent_since(temp.path(), date("2026-08-04"), 7).unwrap();
        assert_eq!(report, "newer entry\n\n---\n\nolder entry");
    }

    #[test]
    fn entries_outside_the_window_are_excluded() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("2026-07-01.md"), "ancient").unwrap();
        fs::write(temp.path().join("2026-08-03.md"), "recent").unwrap();

        let report = render_recent_since(temp.path(), date("2026-08-04"), 7).unwrap();
        assert_eq!(report, "recent");
    }

    #[test]
    fn cutoff_day_itself_is_included() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("2026-07-28.md"), "boundary").unwrap();

        let report = render_recent_since(temp.path(), date("2026-08-04"), 7).unwrap();
        assert_eq!(report, "boundary");
    }

    #[test]
    fn unparseable_and_underscored_names_are_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("_template.md"), "template").unwrap();
        fs::write(temp.path().join("notes.md"), "not a date").unwrap();
        fs::write(temp.path().join("2026-13-99.md"), "bad date").unwrap();
        fs::write(temp.path().join("2026-08-03.md"), "kept").unwrap();

        let report = render_recent_since(temp.path(), date("2026-08-04"), 7).unwrap();
        assert_eq!(report, "kept");
    }

    #[test]
    fn empty_directory_renders_nothing() {
        let temp = tempdir().unwrap();
        let report = render_recent_since(temp.path(), date("2026-08-04"), 7).unwrap();
        assert_eq!(report, "");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let err = render_recent(&temp.path().join("nope"), 7).unwrap_err();
        assert!(err.to_string().contains("directory"));
    }
}
