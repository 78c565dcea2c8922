//! Command implementations for the skein CLI.

mod bundle;
mod graph;

pub use bundle::bundle_execute;
pub use graph::graph_execute;

use std::path::{Path, PathBuf};

use skein_bundler::{GraphBuilder, ModuleGraph};
use skein_graph::ModuleId;
use skein_resolve::{DiskSource, FileIndex, DEFAULT_EXTENSIONS};

use crate::config::SkeinConfig;
use crate::error::{CliError, Result};

/// Validate the entry path, crawl the project, and run the traversal.
///
/// Flag values win over config values; the index root defaults to the entry
/// file's directory.
fn build_graph(
    entry_path: &Path,
    root_flag: Option<PathBuf>,
    extension_flags: &[String],
    config: &SkeinConfig,
) -> Result<ModuleGraph> {
    if !entry_path.is_file() {
        return Err(CliError::EntryMissing(entry_path.to_path_buf()));
    }
    let entry = ModuleId::new(entry_path)?;

    let root = root_flag
        .or_else(|| config.root.clone())
        .unwrap_or_else(|| {
            entry
                .as_path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        });

    let extensions: Vec<String> = if !extension_flags.is_empty() {
        extension_flags.to_vec()
    } else if let Some(configured) = &config.extensions {
        configured.clone()
    } else {
        DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
    };

    let index = FileIndex::build(&[root], &extensions)?;
    let source = DiskSource::new(index);
    let graph = GraphBuilder::new(&source).build(&entry)?;
    Ok(graph)
}
