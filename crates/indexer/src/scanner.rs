use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Top-level directories never indexed.
const EXCLUDED_ROOTS: &[&str] = &["tools", "node_modules", "bot"];

/// Filenames skipped anywhere in the tree.
const SKIP_FILENAMES: &[&str] = &["AGENTS.md"];

/// Scanner for finding markdown documents in the knowledge base
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan for `.md` files, returning sorted root-relative paths.
    ///
    /// Paths with a dot-prefixed component, paths under the fixed excluded
    /// top-level directories, and the fixed skip filenames are left out.
    /// Sorting keeps the output independent of traversal order.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for result in WalkDir::new(&self.root) {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !Self::is_markdown(path) {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            if Self::is_excluded(relative) {
                continue;
            }

            files.push(relative.to_path_buf());
        }

        files.sort();
        log::info!("Found {} markdown files", files.len());
        files
    }

    fn is_markdown(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    }

    fn is_excluded(relative: &Path) -> bool {
        for (depth, component) in relative.components().enumerate() {
            let Component::Normal(name) = component else {
                continue;
            };
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                return true;
            }
            if depth == 0 && EXCLUDED_ROOTS.iter().any(|excluded| excluded == &name) {
                return true;
            }
        }

        relative
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| SKIP_FILENAMES.contains(&name))
    }
}
