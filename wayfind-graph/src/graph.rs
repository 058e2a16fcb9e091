//! Path solver graph traits.

/// Graph building functions.
pub trait GraphBuilder<T, W> {
    /// Insert a node with its outgoing weighted links,
    /// replacing any links previously recorded for the same tag.
    fn add_node<I: IntoIterator<Item = (T, W)>>(&mut self, node_tag: T, links: I);
}

/// Path finding functions.
pub trait GraphSolver<T, W> {
    /// Find the cheapest path from `from` node to `to` node, including both
    /// endpoints, together with its total cost.
    /// Returns `None` when `to` cannot be reached from `from`.
    fn route(&self, from: &T, to: &T) -> Option<(Vec<T>, W)>;
}
