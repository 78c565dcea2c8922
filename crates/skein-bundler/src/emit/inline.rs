use rustc_hash::FxHashMap;
use tracing::debug;

use skein_graph::requires::{exports_expression, rewrite_requires};
use skein_graph::ModuleRecord;

use crate::{EmitError, ModuleGraph};

/// Serialize `graph` by textual inlining: each `require('<specifier>')`
/// occurrence is replaced with the body of the module it resolves to, and
/// the entry's fully-substituted body is the artifact - a single expression
/// with no runtime.
///
/// A module's body is the expression assigned via `module.exports = <expr>;`
/// when that pattern is present, or the raw module text otherwise. Modules
/// are processed in an explicit dependency-respecting order (post-order DFS
/// from the entry), so a dependency's body has reached its final form before
/// any requirer splices it in. Cycles are detected during the ordering pass
/// and reported as [`EmitError::CyclicInline`] - substitution over a cycle
/// would never terminate.
///
/// Known limitations, inherent to the strategy: a dependency's text is
/// duplicated once per call site that requires it, and bodies are spliced
/// verbatim with no precedence-protecting parentheses.
pub fn emit_inline(graph: &ModuleGraph) -> Result<String, EmitError> {
    let order = post_order(graph)?;

    let table = graph.table();
    let mut bodies: FxHashMap<u32, String> = FxHashMap::default();
    let mut entry_body = String::new();

    for record in order {
        let body = exports_expression(record.source())
            .map(str::to_owned)
            .unwrap_or_else(|| record.source().to_owned());

        let body = rewrite_requires(&body, |specifier| {
            record
                .resolve_specifier(specifier)
                .and_then(|target| table.ordinal_of(target))
                .and_then(|ordinal| bodies.get(&ordinal).cloned())
        });

        if record.id() == graph.entry() {
            entry_body = body.clone();
        }
        bodies.insert(record.ordinal(), body);
    }

    debug!(modules = table.len(), "inline bundle emitted");
    Ok(entry_body)
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    /// On the current DFS path; meeting it again means a cycle.
    Active,
    /// Fully processed, body order settled.
    Done,
}

enum Step {
    Enter(u32),
    Exit(u32),
}

/// Dependency-respecting processing order: iterative post-order DFS from
/// the entry (ordinal 0), with explicit cycle detection.
fn post_order(graph: &ModuleGraph) -> Result<Vec<&ModuleRecord>, EmitError> {
    let table = graph.table();
    let mut marks: FxHashMap<u32, Mark> = FxHashMap::default();
    let mut order = Vec::with_capacity(table.len());
    let mut path: Vec<u32> = Vec::new();
    let mut stack = vec![Step::Enter(0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(ordinal) => {
                // Already active (sibling edge) or done: nothing to expand.
                if marks.contains_key(&ordinal) {
                    continue;
                }
                marks.insert(ordinal, Mark::Active);
                path.push(ordinal);
                stack.push(Step::Exit(ordinal));

                let record = expect_record(graph, ordinal);
                for dep in record.dependencies() {
                    let child = table
                        .ordinal_of(&dep.target)
                        .expect("traversal recorded every dependency target");
                    match marks.get(&child) {
                        Some(Mark::Active) => {
                            return Err(cycle_error(graph, &path, child));
                        }
                        Some(Mark::Done) => {}
                        None => stack.push(Step::Enter(child)),
                    }
                }
            }
            Step::Exit(ordinal) => {
                marks.insert(ordinal, Mark::Done);
                path.pop();
                order.push(expect_record(graph, ordinal));
            }
        }
    }

    Ok(order)
}

fn expect_record(graph: &ModuleGraph, ordinal: u32) -> &ModuleRecord {
    graph
        .table()
        .by_ordinal(ordinal)
        .expect("ordinals come from the same table")
}

fn cycle_error(graph: &ModuleGraph, path: &[u32], closing: u32) -> EmitError {
    let start = path.iter().position(|&o| o == closing).unwrap_or(0);
    let mut names: Vec<String> = path[start..]
        .iter()
        .map(|&o| expect_record(graph, o).id().file_name().into_owned())
        .collect();
    names.push(expect_record(graph, closing).id().file_name().into_owned());

    EmitError::CyclicInline {
        cycle: names.join(" -> "),
    }
}
