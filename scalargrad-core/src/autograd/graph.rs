use crate::scalar::{NodeId, Scalar};
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Every node appears *after* all of its operands ("children first"); `root` is always
/// last. Nodes are deduplicated by identity, so a shared operand is listed once no matter
/// how many consumers it has.
///
/// The depth-first walk keeps its own stack instead of recursing, so deep expression chains
/// cannot overflow the call stack.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, operands_already_pushed)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are emitted in operand order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} reachable nodes", sorted_list.len());
    sorted_list
}

/// Collects every node reachable from `root` and the operand edges between them.
///
/// Each edge is `(operand, consumer)`. A consumer that lists the same operand twice
/// (e.g. `a + a`) yields that edge twice. Nothing is mutated; this is the read-only view a
/// graph renderer needs.
pub fn trace(root: &Scalar) -> (Vec<Scalar>, Vec<(Scalar, Scalar)>) {
    let nodes = topological_sort(root);
    let edges = nodes
        .iter()
        .flat_map(|consumer| {
            consumer
                .operands()
                .into_iter()
                .map(move |operand| (operand, consumer.clone()))
        })
        .collect();
    (nodes, edges)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
