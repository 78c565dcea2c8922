use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Extensions indexed when the caller does not configure any.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// A build-once snapshot of the candidate source files under a project.
///
/// The crawl is gitignore-aware (via the `ignore` walker) and filters by
/// file extension. The snapshot is read-only for the duration of a build:
/// resolution probes it, traversal never mutates it, and a new build crawls
/// afresh.
#[derive(Debug)]
pub struct FileIndex {
    files: FxHashSet<PathBuf>,
    roots: Vec<PathBuf>,
}

impl FileIndex {
    /// Crawl `roots` and snapshot every file whose extension is in
    /// `extensions`.
    ///
    /// Roots are canonicalized up front so indexed paths line up with the
    /// canonical [`ModuleId`](skein_graph::ModuleId) form the resolver
    /// produces. Unreadable directory entries are skipped with a warning;
    /// a missing root is an error.
    pub fn build(
        roots: &[PathBuf],
        extensions: &[impl AsRef<str>],
    ) -> Result<Self, IndexError> {
        let mut files = FxHashSet::default();
        let mut canonical_roots = Vec::with_capacity(roots.len());

        for root in roots {
            if !root.is_dir() {
                return Err(IndexError::RootNotFound(root.clone()));
            }
            let root = root
                .canonicalize()
                .map_err(|source| IndexError::Canonicalize {
                    path: root.clone(),
                    source,
                })?;

            for entry in WalkBuilder::new(&root).build() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!(error = %err, "skipping unreadable entry during crawl");
                        continue;
                    }
                };

                let path = entry.path();
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                if has_indexed_extension(path, extensions) {
                    files.insert(path.to_path_buf());
                }
            }

            canonical_roots.push(root);
        }

        debug!(
            files = files.len(),
            roots = canonical_roots.len(),
            "file index built"
        );

        Ok(Self {
            files,
            roots: canonical_roots,
        })
    }

    /// Whether `path` is an indexed source file.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// The canonicalized crawl roots.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_indexed_extension(path: &Path, extensions: &[impl AsRef<str>]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.as_ref() == ext))
}

/// Errors produced while building a [`FileIndex`].
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to canonicalize index root '{}': {source}", .path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
