use std::path::{Path, PathBuf};

use path_clean::PathClean;

use skein_graph::{ModuleId, SourceError};

use crate::FileIndex;

/// Resolves `require` specifiers against a [`FileIndex`] snapshot.
///
/// A specifier is only meaningful relative to the file that requires it, so
/// every resolution starts from the requiring module's directory. Relative
/// (`./`, `../`) and absolute specifiers are supported; for each, the
/// snapshot is probed in order: the path exactly as written, the path with
/// `.js` appended, then `<path>/index.js`. Bare specifiers (package names)
/// are outside the scope of this bundler and always fail to resolve.
///
/// Resolution is a pure function of the requiring module, the specifier, and
/// the snapshot - it has no side effects and is idempotent, so resolving the
/// same specifier from the same file always yields the same identity.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'index> {
    index: &'index FileIndex,
}

impl<'index> Resolver<'index> {
    pub fn new(index: &'index FileIndex) -> Self {
        Self { index }
    }

    /// Resolve `specifier` as written in `from` to a canonical identity.
    pub fn resolve(&self, from: &ModuleId, specifier: &str) -> Result<ModuleId, SourceError> {
        let unresolved = || SourceError::Unresolved {
            specifier: specifier.to_string(),
            from: from.clone(),
        };

        let base = if Path::new(specifier).is_absolute() {
            PathBuf::from(specifier)
        } else if specifier.starts_with("./") || specifier.starts_with("../") {
            let dir = from.as_path().parent().ok_or_else(unresolved)?;
            dir.join(specifier)
        } else {
            // Bare specifier: no package lookup in a minimal bundler.
            return Err(unresolved());
        };

        let base = base.clean();

        for candidate in candidates(&base) {
            if self.index.contains(&candidate) {
                return Ok(ModuleId::new(candidate)?);
            }
        }

        Err(unresolved())
    }
}

/// Probe order: exact, `<path>.js`, `<path>/index.js`. First hit wins.
fn candidates(base: &Path) -> [PathBuf; 3] {
    let mut with_extension = base.as_os_str().to_os_string();
    with_extension.push(".js");

    [
        base.to_path_buf(),
        PathBuf::from(with_extension),
        base.join("index.js"),
    ]
}
