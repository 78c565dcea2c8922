use tracing::debug;

use skein_graph::requires::rewrite_requires;

use crate::ModuleGraph;

/// The fixed bootstrap runtime prepended to every registry bundle.
///
/// `define` registers a module factory under its numeric id; `requireModule`
/// executes a factory on first reference and caches its `module.exports`,
/// so re-requiring an id returns the cached export object without
/// re-executing the body. The cache entry is installed before the factory
/// runs, which is what lets cyclic graphs load.
const BOOTSTRAP: &str = r#"var __skein_modules__ = new Map();
var __skein_cache__ = new Map();

function define(id, factory) {
  __skein_modules__.set(id, factory);
}

function requireModule(id) {
  var cached = __skein_cache__.get(id);
  if (cached !== undefined) {
    return cached.exports;
  }
  var module = { exports: {} };
  __skein_cache__.set(id, module);
  __skein_modules__.get(id)(module, module.exports, requireModule);
  return module.exports;
}
"#;

/// Serialize `graph` as a self-contained registry bundle.
///
/// Each module's `require('<specifier>')` occurrences are rewritten to
/// `require(<ordinal>)` using that module's own dependency map, then the
/// rewritten source is wrapped as a loader unit keyed by the module's
/// ordinal. Units are emitted in reverse discovery order so the entry unit
/// (ordinal 0) comes last, after everything it may pull in is registered.
/// The final line kicks off the entry.
///
/// Infallible: every scanned specifier was resolved during traversal, and
/// `require` here is resolved at load time, so cycles need no special
/// handling.
pub fn emit_registry(graph: &ModuleGraph) -> String {
    let table = graph.table();
    let mut out = String::from(BOOTSTRAP);

    for record in table.iter().rev() {
        let rewritten = rewrite_requires(record.source(), |specifier| {
            record
                .resolve_specifier(specifier)
                .and_then(|target| table.ordinal_of(target))
                .map(|ordinal| format!("require({ordinal})"))
        });

        out.push_str(&format!(
            "\ndefine({}, function(module, exports, require) {{\n{}\n}});\n",
            record.ordinal(),
            rewritten,
        ));
    }

    out.push_str("\nrequireModule(0);\n");

    debug!(
        modules = table.len(),
        bytes = out.len(),
        "registry bundle emitted"
    );
    out
}
