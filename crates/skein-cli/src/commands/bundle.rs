use skein_bundler::{emit, write_bundle, Strategy};

use crate::cli::BundleArgs;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Execute the bundle command: traverse, serialize, write.
pub fn bundle_execute(args: BundleArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;

    let graph = super::build_graph(&args.entry, args.root.clone(), &args.extensions, &config)?;

    let strategy: Strategy = args
        .strategy
        .map(Into::into)
        .or(config.strategy)
        .unwrap_or_default();

    let artifact = emit(&graph, strategy)?;

    let output = args.output.clone().or_else(|| config.output.clone());
    write_bundle(&artifact, output.as_deref())?;

    if let Some(path) = &output {
        ui::success(&format!(
            "bundled {} modules ({strategy}) -> {}",
            graph.table().len(),
            path.display()
        ));
    }

    Ok(())
}
