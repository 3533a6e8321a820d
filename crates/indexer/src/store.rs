use crate::error::Result;
use kb_chunker::Chunk;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Directory holding the index artifact, under the knowledge-base root.
pub const INDEX_DIR_NAME: &str = ".kb-index";

/// Filename of the index artifact.
pub const INDEX_FILE_NAME: &str = "index.json";

/// The persisted index artifact.
///
/// A single JSON document: embedding model id, local build timestamp,
/// per-file fingerprints for exactly the currently-existing documents, and
/// the full ordered chunk list. Loading validates the shape; anything
/// malformed is treated as if no index existed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeIndex {
    /// Embedding model the chunks were embedded with.
    pub model: String,

    /// Local `%Y-%m-%dT%H:%M:%S` timestamp of the build.
    pub indexed_at: String,

    /// Document path -> content fingerprint.
    pub file_hashes: BTreeMap<String, String>,

    /// Ordered chunk list, ids dense from 0.
    pub chunks: Vec<Chunk>,
}

impl KnowledgeIndex {
    /// All chunks belonging to one document, in stored order.
    pub fn chunks_for_file<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a Chunk> {
        self.chunks.iter().filter(move |chunk| chunk.file == file)
    }
}

/// Load/save handle for the index artifact
#[derive(Debug)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store handle for a knowledge-base root (`<root>/.kb-index/index.json`).
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(INDEX_DIR_NAME).join(INDEX_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted index.
    ///
    /// A missing artifact returns `None`. So does a corrupt one: a parse
    /// failure downgrades to a from-scratch rebuild instead of an error.
    pub fn load(&self) -> Option<KnowledgeIndex> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(index) => Some(index),
            Err(err) => {
                log::warn!(
                    "Discarding corrupt index {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Persist the index, reassigning dense sequential chunk ids in final
    /// list order.
    pub fn save(&self, index: &mut KnowledgeIndex) -> Result<()> {
        for (id, chunk) in index.chunks.iter_mut().enumerate() {
            chunk.id = id;
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string(index)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}
