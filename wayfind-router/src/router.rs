//! Graph ownership, snapshot merging and route queries.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use wayfind_graph::{Dijkstra, GraphBuilder, GraphSolver};

use crate::errors::{LoadError, RouterError};
use crate::metric::Metric;
use crate::snapshot::{self, EdgeWeights, Snapshot};

/// Result of a route query.
///
/// The cost field is named `total_distance` for any metric, time-based
/// queries included; consumers of the result document rely on that name.
/// An unreachable destination is encoded as an empty path with infinite
/// cost, not as an error.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RouteResult {
    pub path: Vec<String>,
    pub total_distance: f64,
}

impl RouteResult {
    fn identity(node: &str) -> Self {
        RouteResult {
            path: vec![node.to_string()],
            total_distance: 0.0,
        }
    }

    fn unreachable() -> Self {
        RouteResult {
            path: Vec::new(),
            total_distance: f64::INFINITY,
        }
    }

    /// `false` when the destination could not be reached.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Owns the directed weighted graph and answers route queries against it.
///
/// Shared state guarded by a regular sync lock: loads are mutually exclusive
/// with queries, while any number of queries may run against a stable graph.
pub struct GraphRouter {
    graph: RwLock<HashMap<String, HashMap<String, EdgeWeights>>>,
}

impl GraphRouter {
    /// Create a router with an empty graph.
    pub fn new() -> Self {
        GraphRouter {
            graph: RwLock::new(HashMap::new()),
        }
    }

    /// Create a router pre-populated from an initial snapshot.
    pub fn with_graph(initial: Snapshot) -> Self {
        let router = GraphRouter::new();
        router.merge(initial);
        router
    }

    /// Merge an already-decoded snapshot into the graph.
    ///
    /// Nodes and edges are only ever added or overwritten, never removed.
    /// Every neighbor referenced by a merged edge ends up as a graph key,
    /// so the graph holds no dangling references.
    pub fn merge(&self, snapshot: Snapshot) {
        let mut graph = self.graph.write();
        for (node, edges) in snapshot {
            let neighbors: Vec<String> = edges.keys().cloned().collect();
            graph.entry(node).or_default().extend(edges);
            for neighbor in neighbors {
                graph.entry(neighbor).or_default();
            }
        }
    }

    /// Read a snapshot document from `source` and merge it.
    ///
    /// Returns `false` when the document cannot be read or its root is not a
    /// mapping, leaving the graph as it was. Per-node entries of the wrong
    /// shape are skipped and the rest of the document is still applied.
    pub fn load_data<R: Read>(&self, source: R) -> bool {
        match self.try_load(source) {
            Ok(()) => true,
            Err(e) => {
                warn!("snapshot rejected: {}", e);
                false
            }
        }
    }

    /// Read and merge a snapshot from a JSON file on disk.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        match self.try_load_file(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("snapshot [{}] rejected: {}", path.display(), e);
                false
            }
        }
    }

    fn try_load_file(&self, path: &Path) -> Result<(), LoadError> {
        let file = File::open(path)?;
        self.try_load(BufReader::new(file))
    }

    fn try_load<R: Read>(&self, source: R) -> Result<(), LoadError> {
        let doc: serde_json::Value = serde_json::from_reader(source)?;
        let snapshot = snapshot::decode(doc)?;
        self.merge(snapshot);
        Ok(())
    }

    /// Find the cheapest route from `start` to `end` under the given metric.
    ///
    /// `metric` must name one of the supported edge weights; anything else is
    /// an `InvalidMetric` error. A missing start or end node, or an exhausted
    /// search, is not an error: the result is simply unreachable. The graph
    /// is never mutated by a query.
    pub fn find_route(&self, start: &str, end: &str, metric: &str) -> Result<RouteResult, RouterError> {
        let metric: Metric = metric.parse()?;

        // The identity route holds even for a node the graph has never seen,
        // and regardless of outgoing edges
        if start == end {
            return Ok(RouteResult::identity(start));
        }

        let graph = self.graph.read();
        if !graph.contains_key(start) || !graph.contains_key(end) {
            return Ok(RouteResult::unreachable());
        }

        // Single-metric view of the graph; edges lacking the requested
        // metric are unusable for it and carry no finite weight
        let mut solver = Dijkstra::new();
        for (node, edges) in graph.iter() {
            let links = edges.iter().filter_map(|(neighbor, weights)| {
                weights.get(metric.as_str()).map(|&w| (neighbor.as_str(), w))
            });
            solver.add_node(node.as_str(), links);
        }

        let result = match solver.route(&start, &end) {
            Some((path, cost)) => RouteResult {
                path: path.into_iter().map(str::to_string).collect(),
                total_distance: cost,
            },
            None => RouteResult::unreachable(),
        };
        Ok(result)
    }

    /// Number of nodes currently known to the graph.
    pub fn node_count(&self) -> usize {
        self.graph.read().len()
    }

    /// `true` if `node` is a key of the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.graph.read().contains_key(node)
    }

    /// All node identifiers currently in the graph, in no particular order.
    pub fn node_ids(&self) -> Vec<String> {
        self.graph.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_snapshot() -> Snapshot {
        let doc = json!({
            "A": {"B": {"distance": 10, "time": 5},
                  "D": {"distance": 100, "time": 1}},
            "B": {"C": {"distance": 5, "time": 2}},
            "C": {},
            "D": {"C": {"distance": 1, "time": 1}},
        });
        serde_json::from_value(doc).expect("bad test snapshot")
    }

    fn sample_router() -> GraphRouter {
        GraphRouter::with_graph(sample_snapshot())
    }

    fn assert_no_dangling(router: &GraphRouter) {
        let graph = router.graph.read();
        for edges in graph.values() {
            for neighbor in edges.keys() {
                assert!(graph.contains_key(neighbor), "dangling neighbor [{}]", neighbor);
            }
        }
    }

    #[test]
    fn test_route_by_distance() {
        let router = sample_router();
        let result = router.find_route("A", "C", "distance").expect("query failed");
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.total_distance, 15.0);
    }

    #[test]
    fn test_route_by_time() {
        let router = sample_router();
        let result = router.find_route("A", "C", "time").expect("query failed");
        assert_eq!(result.path, vec!["A", "D", "C"]);
        assert_eq!(result.total_distance, 2.0);
    }

    #[test]
    fn test_start_equals_end() {
        let router = sample_router();
        let result = router.find_route("A", "A", "distance").expect("query failed");
        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.total_distance, 0.0);

        // Holds before any membership check, even for an unknown node
        let result = router.find_route("Q", "Q", "time").expect("query failed");
        assert_eq!(result.path, vec!["Q"]);
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_unreachable_destination() {
        let router = sample_router();
        let result = router.find_route("A", "Z", "distance").expect("query failed");
        assert!(result.path.is_empty());
        assert_eq!(result.total_distance, f64::INFINITY);
        assert!(!result.is_reachable());

        let result = router.find_route("Z", "A", "distance").expect("query failed");
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_disconnected_destination() {
        // "C" never leads back to "A"
        let router = sample_router();
        let result = router.find_route("C", "A", "distance").expect("query failed");
        assert!(result.path.is_empty());
        assert_eq!(result.total_distance, f64::INFINITY);
    }

    #[test]
    fn test_invalid_metric_fails() {
        let router = sample_router();
        let err = router.find_route("A", "C", "fuel_cost").expect_err("metric must be rejected");
        assert_eq!(err, RouterError::InvalidMetric("fuel_cost".to_string()));
    }

    #[test]
    fn test_edge_without_requested_metric_is_unusable() {
        let doc = json!({
            "A": {"B": {"distance": 3}},
            "B": {},
        });
        let router = GraphRouter::with_graph(serde_json::from_value(doc).expect("bad test snapshot"));

        let result = router.find_route("A", "B", "distance").expect("query failed");
        assert_eq!(result.path, vec!["A", "B"]);
        assert_eq!(result.total_distance, 3.0);

        // The only route to "B" carries no "time" weight
        let result = router.find_route("A", "B", "time").expect("query failed");
        assert!(result.path.is_empty());
        assert_eq!(result.total_distance, f64::INFINITY);
    }

    #[test]
    fn test_load_data_extends_graph() {
        let router = sample_router();
        let initial_count = router.node_count();

        let update = br#"{"D": {"E": {"distance": 8, "time": 4}},
                          "E": {"F": {"distance": 2, "time": 1}}}"#;
        assert!(router.load_data(&update[..]));

        assert!(router.contains("F"), "neighbor-only node must become a graph key");
        assert_eq!(router.node_count(), initial_count + 2);
        assert_no_dangling(&router);

        let result = router.find_route("A", "F", "distance").expect("query failed");
        assert_eq!(result.path, vec!["A", "D", "E", "F"]);
        assert_eq!(result.total_distance, 110.0);
    }

    #[test]
    fn test_load_data_is_idempotent() {
        let router = sample_router();
        let update = br#"{"D": {"E": {"distance": 8, "time": 4}},
                          "E": {"F": {"distance": 2, "time": 1}}}"#;
        assert!(router.load_data(&update[..]));
        let count_after_first = router.node_count();
        let route_after_first = router.find_route("A", "F", "distance").expect("query failed");

        assert!(router.load_data(&update[..]));
        assert_eq!(router.node_count(), count_after_first);
        assert_eq!(router.find_route("A", "F", "distance").expect("query failed"), route_after_first);
    }

    #[test]
    fn test_load_data_overwrites_edge_weights() {
        let router = sample_router();
        assert!(router.load_data(&br#"{"B": {"C": {"distance": 200, "time": 80}}}"#[..]));

        // A -> B -> C is now more expensive than A -> D -> C
        let result = router.find_route("A", "C", "distance").expect("query failed");
        assert_eq!(result.path, vec!["A", "D", "C"]);
        assert_eq!(result.total_distance, 101.0);
    }

    #[test]
    fn test_load_data_rejects_bad_documents() {
        let router = sample_router();
        let count = router.node_count();

        assert!(!router.load_data(&b"not json at all"[..]));
        assert!(!router.load_data(&b"[1, 2, 3]"[..]));
        assert!(!router.load_data(&b"\"graph\""[..]));

        assert_eq!(router.node_count(), count, "rejected documents must not change the graph");
    }

    #[test]
    fn test_load_data_skips_malformed_nodes() {
        let router = sample_router();
        let update = br#"{"X": 17, "E": {"F": {"distance": 2, "time": 1}}}"#;
        assert!(router.load_data(&update[..]));

        // The malformed node exists, but contributes no edges
        assert!(router.contains("X"));
        assert!(router.contains("E"));
        assert!(router.contains("F"));
        assert!(!router.find_route("A", "X", "distance").expect("query failed").is_reachable());
        assert_no_dangling(&router);
    }

    #[test]
    fn test_query_does_not_mutate() {
        let router = sample_router();
        let mut ids_before = router.node_ids();
        ids_before.sort();

        router.find_route("A", "C", "distance").expect("query failed");
        router.find_route("A", "Z", "time").expect("query failed");
        let _ = router.find_route("A", "C", "bogus");

        let mut ids_after = router.node_ids();
        ids_after.sort();
        assert_eq!(ids_before, ids_after);
        assert_no_dangling(&router);
    }

    #[test]
    fn test_load_file() {
        let router = sample_router();

        let path = std::env::temp_dir().join(format!("wayfind-load-test-{}.json", std::process::id()));
        std::fs::write(&path, br#"{"D": {"E": {"distance": 8, "time": 4}}}"#).expect("cannot write test file");
        assert!(router.load_file(&path));
        std::fs::remove_file(&path).expect("cannot remove test file");

        assert!(router.contains("E"));
        assert!(!router.load_file(&path), "missing file must be reported, not raised");
    }
}
