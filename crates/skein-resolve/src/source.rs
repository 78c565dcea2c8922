use std::fs;
use std::io;

use tracing::trace;

use skein_graph::{DependencySource, ModuleId, SourceError};

use crate::{FileIndex, Resolver};

/// The production [`DependencySource`]: a crawl snapshot plus filesystem
/// reads.
///
/// `dependencies_of` uses the trait's default scan over [`source_text`],
/// so the index is consulted before every read - a file that vanished
/// between crawl and traversal surfaces as `NotFound`, which aborts the
/// build rather than producing a partial bundle.
///
/// [`source_text`]: DependencySource::source_text
#[derive(Debug)]
pub struct DiskSource {
    index: FileIndex,
}

impl DiskSource {
    pub fn new(index: FileIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }
}

impl DependencySource for DiskSource {
    fn contains(&self, id: &ModuleId) -> bool {
        self.index.contains(id.as_path())
    }

    fn source_text(&self, id: &ModuleId) -> Result<String, SourceError> {
        if !self.index.contains(id.as_path()) {
            return Err(SourceError::NotFound(id.clone()));
        }

        trace!(module = %id, "reading module source");
        fs::read_to_string(id.as_path()).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(id.clone())
            } else {
                SourceError::Io {
                    path: id.as_path().to_path_buf(),
                    source: err,
                }
            }
        })
    }

    fn resolve(&self, from: &ModuleId, specifier: &str) -> Result<ModuleId, SourceError> {
        Resolver::new(&self.index).resolve(from, specifier)
    }
}
