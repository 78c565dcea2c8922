use serde_json::json;

use crate::cli::GraphArgs;
use crate::config;
use crate::error::Result;

/// Execute the graph command: traverse and print the module table as JSON.
///
/// The view exposes everything the serializers consume - ordinals, canonical
/// paths, and per-module dependency edges - but not module source text.
pub fn graph_execute(args: GraphArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let graph = super::build_graph(&args.entry, args.root.clone(), &args.extensions, &config)?;

    let view = json!({
        "entry": graph.entry(),
        "modules": graph.table().records(),
    });

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
