//! External snapshot documents and their decoding.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::LoadError;

/// Outgoing edge weights, keyed by metric name.
/// An edge need not define every metric; a missing one makes the edge
/// unusable for queries on that metric.
pub type EdgeWeights = HashMap<String, f64>;

/// External graph document: node identifier to outgoing-edge set,
/// itself a mapping from neighbor identifier to edge weights.
pub type Snapshot = HashMap<String, HashMap<String, EdgeWeights>>;

/// Decode a snapshot document.
///
/// The root must be a mapping. A per-node entry whose edge set does not have
/// the expected shape is logged and kept as a node without outgoing edges,
/// while the rest of the document is still decoded.
pub(crate) fn decode(doc: Value) -> Result<Snapshot, LoadError> {
    let root = match doc {
        Value::Object(map) => map,
        _ => return Err(LoadError::NotAMapping),
    };

    let mut snapshot = Snapshot::with_capacity(root.len());
    for (node, edges) in root {
        match serde_json::from_value::<HashMap<String, EdgeWeights>>(edges) {
            Ok(edges) => {
                snapshot.insert(node, edges);
            }
            Err(e) => {
                warn!("ignoring malformed edges of node [{}]: {}", node, e);
                snapshot.insert(node, HashMap::new());
            }
        }
    }
    Ok(snapshot)
}
