//! Command-line interface definition for the skein bundler.
//!
//! Defined with clap v4 derive macros. The CLI owns everything the bundler
//! core deliberately does not: path arguments, existence validation,
//! output-destination plumbing, and process exit behavior.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use skein_bundler::Strategy;

/// skein - a minimal CommonJS bundler
#[derive(Parser, Debug)]
#[command(
    name = "skein",
    version,
    about = "A minimal CommonJS bundler",
    long_about = "Skein discovers every module statically required from an entry file,\n\
                  builds a dependency graph, and serializes it into one self-contained\n\
                  script - either with a tiny loader runtime (registry) or by inlining\n\
                  module bodies into their requirers (inline)."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-module discovery and resolution detail during the build.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or terminals without color support.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available skein subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle an entry module into a single artifact
    ///
    /// Traverses the static require() graph from the entry file and writes
    /// one self-contained script to the output path (or stdout).
    Bundle(BundleArgs),

    /// Print the discovered dependency graph as JSON
    ///
    /// Runs the same traversal as `bundle` but emits the module table -
    /// ordinals, paths, and dependency edges - instead of an artifact.
    Graph(GraphArgs),
}

/// Arguments for the bundle command
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Entry module to bundle
    ///
    /// The file must exist; everything statically reachable from it through
    /// require('...') calls ends up in the bundle.
    #[arg(value_name = "ENTRY")]
    pub entry: PathBuf,

    /// Output file for the bundle
    ///
    /// Written with parent directories created as needed. When omitted, the
    /// artifact goes to stdout and status messages stay on stderr.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Serialization strategy
    ///
    /// - registry: wrap each module in a loader function and prepend a small
    ///   runtime; cycles are tolerated
    /// - inline: substitute module bodies into their requirers; no runtime,
    ///   but cyclic graphs are rejected
    #[arg(short = 's', long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Project root to index for module resolution
    ///
    /// Defaults to the entry file's directory. Only files under the root can
    /// be resolved as dependencies.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File extension to index (repeatable)
    ///
    /// Defaults to `js`.
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Path to a skein.toml config file
    ///
    /// When omitted, skein.toml in the current directory is used if present.
    /// Command-line flags take precedence over config values.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the graph command
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Entry module to traverse from
    #[arg(value_name = "ENTRY")]
    pub entry: PathBuf,

    /// Project root to index for module resolution
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File extension to index (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Path to a skein.toml config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Serialization strategy as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Loader runtime plus numbered module factories
    Registry,
    /// Module bodies substituted into their requirers
    Inline,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Registry => Strategy::Registry,
            StrategyArg::Inline => Strategy::Inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bundle_parses_strategy_and_output() {
        let cli = Cli::try_parse_from([
            "skein", "bundle", "src/index.js", "--strategy", "inline", "-o", "dist/out.js",
        ])
        .unwrap();

        match cli.command {
            Command::Bundle(args) => {
                assert_eq!(args.strategy, Some(StrategyArg::Inline));
                assert_eq!(args.output.unwrap().to_str().unwrap(), "dist/out.js");
            }
            other => panic!("expected bundle, got {other:?}"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["skein", "-v", "-q", "bundle", "index.js"]);
        assert!(result.is_err());
    }

    #[test]
    fn extensions_are_repeatable() {
        let cli = Cli::try_parse_from([
            "skein",
            "bundle",
            "index.js",
            "--extension",
            "js",
            "--extension",
            "cjs",
        ])
        .unwrap();

        match cli.command {
            Command::Bundle(args) => assert_eq!(args.extensions, vec!["js", "cjs"]),
            other => panic!("expected bundle, got {other:?}"),
        }
    }
}
