//! Dijkstra path search implementation.

use std::collections::HashMap;
use std::hash::Hash;

use super::frontier::Frontier;
use super::graph::{GraphBuilder, GraphSolver};
use super::numtraits::Weight;

/// Dijkstra path search.
pub struct Dijkstra<T, W> {
    /// Links node with tag `<T>` to the list of adjacent nodes with corresponding weights `<W>`.
    nodes: HashMap<T, Vec<(T, W)>>,
}

impl<T, W> Dijkstra<T, W> {
    /// Create new instance with empty graph.
    pub fn new() -> Self {
        Dijkstra { nodes: HashMap::new() }
    }
}

impl<T, W> GraphBuilder<T, W> for Dijkstra<T, W>
where
    T: Eq + Hash,
    W: Weight,
{
    fn add_node<I: IntoIterator<Item = (T, W)>>(&mut self, node_tag: T, links: I) {
        let links = links.into_iter().collect::<Vec<(T, W)>>();
        debug_assert!(links.iter().all(|(_, w)| *w >= W::ZERO), "Negative weight detected");
        self.nodes.insert(node_tag, links);
    }
}

impl<T, W> GraphSolver<T, W> for Dijkstra<T, W>
where
    T: Clone + Eq + Hash,
    W: Weight,
{
    fn route(&self, from: &T, to: &T) -> Option<(Vec<T>, W)> {
        // Don't run when we don't have nodes set
        if self.nodes.is_empty() {
            return None;
        }

        // Cost at which each node left the frontier for good
        let mut finalized = HashMap::<T, W>::new();
        let mut frontier = Frontier::<T, W>::new();

        // The path to the starting point is just itself, at zero cost
        frontier.push(W::ZERO, from.clone(), vec![from.clone()]);

        while let Some((cost, node, path)) = frontier.pop() {
            // The goal leaves the frontier at its minimum cost first
            if node == *to {
                return Some((path, cost));
            }

            // Stale entry: the node was already finalized at least as cheaply
            if finalized.get(&node).map_or(false, |known| *known <= cost) {
                continue;
            }
            finalized.insert(node.clone(), cost.clone());

            // Loop all the neighboring nodes
            if let Some(links) = self.nodes.get(&node) {
                for (neighbor, weight) in links.iter() {
                    let neighbor_cost = cost.clone() + weight.clone();

                    // Only enqueue candidates that can still improve on a finalized cost
                    if finalized.get(neighbor).map_or(false, |known| *known <= neighbor_cost) {
                        continue;
                    }

                    let mut neighbor_path = path.clone();
                    neighbor_path.push(neighbor.clone());
                    frontier.push(neighbor_cost, neighbor.clone(), neighbor_path);
                }
            }
        }

        // Frontier exhausted without reaching the goal
        None
    }
}
