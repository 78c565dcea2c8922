//! Optional `skein.toml` configuration.
//!
//! Config values fill in for flags the user did not pass; flags always win.
//! An explicitly requested config file must exist; the implicit
//! `skein.toml` in the current directory is optional.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use skein_bundler::Strategy;

const DEFAULT_CONFIG_FILE: &str = "skein.toml";

/// Contents of a `skein.toml` file. Every field is optional; unknown fields
/// are rejected so typos surface instead of being silently ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkeinConfig {
    /// Project root to index for module resolution.
    pub root: Option<PathBuf>,

    /// File extensions to index.
    pub extensions: Option<Vec<String>>,

    /// Serialization strategy (`registry` or `inline`).
    pub strategy: Option<Strategy>,

    /// Output file for the bundle.
    pub output: Option<PathBuf>,
}

/// Load configuration from `explicit` if given, else from `skein.toml` in
/// the current directory if present, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<SkeinConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(SkeinConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source: Box::new(source),
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}\n\nHint: create a skein.toml or drop the --config flag", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skein.toml");
        fs::write(
            &path,
            r#"
root = "src"
extensions = ["js", "cjs"]
strategy = "inline"
output = "dist/bundle.js"
"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.root.unwrap().to_str().unwrap(), "src");
        assert_eq!(config.extensions.unwrap(), vec!["js", "cjs"]);
        assert_eq!(config.strategy.unwrap(), Strategy::Inline);
        assert_eq!(config.output.unwrap().to_str().unwrap(), "dist/bundle.js");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            load(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skein.toml");
        fs::write(&path, "stratgy = \"inline\"\n").unwrap();

        assert!(matches!(load(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn invalid_strategy_value_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skein.toml");
        fs::write(&path, "strategy = \"concat\"\n").unwrap();

        assert!(matches!(load(Some(&path)), Err(ConfigError::Parse { .. })));
    }
}
