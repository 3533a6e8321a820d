use crate::error::{IndexerError, Result};
use crate::fingerprint::fingerprint;
use crate::scanner::FileScanner;
use crate::stats::IndexStats;
use crate::store::{IndexStore, KnowledgeIndex};
use kb_chunker::{Chunk, MarkdownChunker};
use kb_embeddings::{embed_batched, EmbeddingClient, DEFAULT_MAX_BATCH};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Partition of the corpus relative to the previous build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Documents whose fingerprint differs or that are new.
    pub changed: BTreeSet<String>,

    /// Documents present in the previous build but gone from the corpus.
    pub deleted: BTreeSet<String>,
}

impl ChangeSet {
    /// Compare current fingerprints against the previous build's.
    ///
    /// With no previous build, every document counts as changed.
    #[must_use]
    pub fn compute(
        current: &BTreeMap<String, String>,
        previous: Option<&BTreeMap<String, String>>,
    ) -> Self {
        let mut changed = BTreeSet::new();
        let mut deleted = BTreeSet::new();

        match previous {
            None => {
                changed.extend(current.keys().cloned());
            }
            Some(previous) => {
                for (file, hash) in current {
                    if previous.get(file) != Some(hash) {
                        changed.insert(file.clone());
                    }
                }
                for file in previous.keys() {
                    if !current.contains_key(file) {
                        deleted.insert(file.clone());
                    }
                }
            }
        }

        Self { changed, deleted }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.deleted.is_empty()
    }
}

/// Knowledge-base indexer: scans, chunks, embeds, and persists.
///
/// The embedding client is injected per invocation; the indexer holds no
/// process-wide state.
pub struct KbIndexer<'a> {
    root: PathBuf,
    store: IndexStore,
    client: &'a dyn EmbeddingClient,
    max_batch: usize,
}

impl std::fmt::Debug for KbIndexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KbIndexer")
            .field("root", &self.root)
            .field("store", &self.store)
            .field("max_batch", &self.max_batch)
            .finish()
    }
}

impl<'a> KbIndexer<'a> {
    /// Create an indexer for a knowledge-base root.
    pub fn new(root: impl AsRef<Path>, client: &'a dyn EmbeddingClient) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(IndexerError::InvalidRoot(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let store = IndexStore::for_root(&root);
        Ok(Self {
            root,
            store,
            client,
            max_batch: DEFAULT_MAX_BATCH,
        })
    }

    /// Override the maximum embedding batch size.
    #[must_use]
    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch;
        self
    }

    #[must_use]
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Build or incrementally update the index.
    ///
    /// Unchanged documents keep their chunks and embeddings from the previous
    /// build; only new or changed documents are re-chunked and re-embedded,
    /// so embedding cost tracks changed content, not corpus size. When a
    /// previous build exists and nothing changed, the artifact is left
    /// untouched.
    pub fn index(&self) -> Result<IndexStats> {
        let start = Instant::now();

        log::info!("Indexing knowledge base at {}", self.root.display());

        let files = FileScanner::new(&self.root).scan();

        let mut current_hashes = BTreeMap::new();
        for relative in &files {
            let bytes = std::fs::read(self.root.join(relative))?;
            current_hashes.insert(normalize_rel(relative), fingerprint(&bytes));
        }

        let mut existing = self.store.load();
        if let Some(previous) = &existing {
            if previous.model != self.client.model_id() {
                log::info!(
                    "Embedding model changed from {} to {}; rebuilding from scratch",
                    previous.model,
                    self.client.model_id()
                );
                existing = None;
            }
        }

        let changes = ChangeSet::compute(
            &current_hashes,
            existing.as_ref().map(|index| &index.file_hashes),
        );
        if existing.is_some() && changes.is_empty() {
            log::info!("No files changed; index is up to date");
            return Ok(IndexStats::up_to_date(files.len(), elapsed_ms(start)));
        }
        if !changes.changed.is_empty() {
            log::info!("Changed files: {:?}", changes.changed);
        }
        if !changes.deleted.is_empty() {
            log::info!("Deleted files: {:?}", changes.deleted);
        }

        // Rebuild the chunk list in document order: re-chunk changed files,
        // copy unchanged files' chunks (embeddings included) verbatim.
        let mut all_chunks: Vec<Chunk> = Vec::new();
        let mut pending: Vec<usize> = Vec::new();
        for relative in &files {
            let key = normalize_rel(relative);
            if changes.changed.contains(&key) {
                let text = std::fs::read_to_string(self.root.join(relative))?;
                for chunk in MarkdownChunker::chunk(&key, &text) {
                    pending.push(all_chunks.len());
                    all_chunks.push(chunk);
                }
            } else if let Some(previous) = &existing {
                all_chunks.extend(previous.chunks_for_file(&key).cloned());
            }
        }

        log::info!(
            "Total chunks: {} ({} need embedding)",
            all_chunks.len(),
            pending.len()
        );

        if !pending.is_empty() {
            let texts: Vec<String> = pending
                .iter()
                .map(|&index| all_chunks[index].text.clone())
                .collect();
            let vectors = embed_batched(self.client, &texts, self.max_batch)?;
            for (&index, vector) in pending.iter().zip(vectors) {
                all_chunks[index].embedding = Some(vector);
            }
        }

        let mut index = KnowledgeIndex {
            model: self.client.model_id().to_string(),
            indexed_at: build_timestamp(),
            file_hashes: current_hashes,
            chunks: all_chunks,
        };
        self.store.save(&mut index)?;

        log::info!(
            "Index written to {} ({} chunks)",
            self.store.path().display(),
            index.chunks.len()
        );

        Ok(IndexStats {
            files: files.len(),
            files_changed: changes.changed.len(),
            files_deleted: changes.deleted.len(),
            chunks: index.chunks.len(),
            chunks_embedded: pending.len(),
            skipped: false,
            time_ms: elapsed_ms(start),
        })
    }
}

fn normalize_rel(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn build_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
