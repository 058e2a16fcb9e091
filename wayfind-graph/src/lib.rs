//! Path search in a weighted graph.

pub use self::dijkstra::Dijkstra;
pub use self::graph::{GraphBuilder, GraphSolver};
pub use self::numtraits::Weight;

mod dijkstra;
mod frontier;
mod graph;
mod numtraits;

#[test]
fn test_dijkstra_search() {
    let mut g = Dijkstra::new();
    g.add_node("A", vec![("B", 1.0)]);
    g.add_node("B", vec![("A", 1.0), ("C", 2.0), ("D", 4.0)]);
    g.add_node("C", vec![("B", 2.0), ("D", 1.0)]);
    g.add_node("D", vec![("C", 1.0), ("B", 4.0)]);
    let (path, cost) = g.route(&"A", &"D").expect("route must exist");
    assert_eq!(path, vec!["A", "B", "C", "D"]);
    assert_eq!(cost, 4.0);
}

#[test]
fn test_dijkstra_picks_cheapest_of_many() {
    let mut g = Dijkstra::new();
    g.add_node("1", vec![("2", 7.0), ("3", 9.0), ("6", 14.0)]);
    g.add_node("2", vec![("1", 7.0), ("3", 10.0), ("4", 15.0)]);
    g.add_node("3", vec![("1", 9.0), ("2", 10.0), ("4", 11.0), ("6", 2.0)]);
    g.add_node("4", vec![("2", 15.0), ("3", 11.0), ("5", 6.0)]);
    g.add_node("5", vec![("4", 6.0), ("6", 9.0)]);
    g.add_node("6", vec![("1", 14.0), ("3", 2.0), ("5", 9.0)]);
    let (path, cost) = g.route(&"1", &"5").expect("route must exist");
    assert_eq!(path, vec!["1", "3", "6", "5"]);
    assert_eq!(cost, 20.0);
}

#[test]
fn test_dijkstra_unreachable() {
    let mut g = Dijkstra::new();
    g.add_node("A", vec![("B", 1.0)]);
    g.add_node("B", vec![]);
    g.add_node("C", vec![("A", 1.0)]);
    // "C" has an outgoing edge but nothing leads to it
    assert!(g.route(&"A", &"C").is_none());
    // Unknown start node
    assert!(g.route(&"X", &"A").is_none());
}

#[test]
fn test_dijkstra_trivial_goal() {
    let mut g = Dijkstra::new();
    g.add_node("A", vec![("B", 3.0)]);
    g.add_node("B", vec![]);
    let (path, cost) = g.route(&"A", &"A").expect("route must exist");
    assert_eq!(path, vec!["A"]);
    assert_eq!(cost, 0.0);
}
