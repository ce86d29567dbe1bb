//! Cycle detection for composite tasks.

use crate::error::{Result, TaskError};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use std::collections::BTreeMap;

/// Fails if any composite reaches itself through its steps.
pub(super) fn check_acyclic(composites: &BTreeMap<&str, &[String]>) -> Result<()> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for (&name, steps) in composites {
        graph.add_node(name);
        for step in steps.iter() {
            graph.add_edge(name, step.as_str(), ());
        }
    }

    toposort(&graph, None).map(|_| ()).map_err(|cycle| {
        TaskError::CyclicTask {
            name: cycle.node_id().to_string(),
        }
        .into()
    })
}
