//! Logging infrastructure for the skein CLI.
//!
//! The library crates only emit `tracing` events; this module installs the
//! subscriber for the binary. Verbosity resolves in order: `--verbose`
//! (debug for skein crates), `--quiet` (errors only), the `RUST_LOG`
//! environment variable, then an info-level default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("skein_graph=debug,skein_resolve=debug,skein_bundler=debug,skein_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("skein_graph=info,skein_resolve=info,skein_bundler=info,skein_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
