use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

/// Write a serialized bundle to `output`, or to stdout when no path is
/// given. Parent directories are created as needed.
pub fn write_bundle(artifact: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, artifact)?;
            info!(path = %path.display(), bytes = artifact.len(), "bundle written");
            Ok(())
        }
        None => io::stdout().write_all(artifact.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("dist/nested/bundle.js");

        write_bundle("requireModule(0);", Some(&target)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "requireModule(0);"
        );
    }
}
