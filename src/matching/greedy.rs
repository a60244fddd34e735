//! Greedy nearest-pair balancing.
//!
//! # Complexity
//!
//! One single-source search per unbalanced source vertex (cached), then
//! O(P · S · D) pair scans where P is the number of emitted paths and S, D
//! the surplus/deficit vertex counts.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::models::{BalancingPath, Graph, VertexId};
use crate::shortest_path::{SearchTree, ShortestPath};

/// Pairs the unbalanced vertices of `graph`, returning one shortest path per
/// pair. Adding each path as a virtual edge balances the graph.
///
/// - Directed graphs: vertices with a positive counter (surplus in-degree)
///   are paired with vertices with a negative counter, each vertex taking
///   part in `|counter|` pairs. Paths lead from surplus to deficit.
/// - Undirected graphs: every odd-degree vertex is paired exactly once.
///
/// The globally cheapest remaining pair is always taken first. Unreachable
/// pairs are skipped while some reachable pair remains; if none does, the
/// [`Error::UnreachableVertex`] for the last unreachable pair examined is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::matching::greedy_balancing;
/// use u_postman::shortest_path::DijkstraHeap;
///
/// let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 2.0)]).unwrap();
/// let paths = greedy_balancing(&g, &DijkstraHeap).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].cost(), 3.0);
/// ```
pub fn greedy_balancing(graph: &Graph, engine: &dyn ShortestPath) -> Result<Vec<BalancingPath>> {
    let paths = if graph.is_directed() {
        balance_directed(graph, engine)?
    } else {
        balance_undirected(graph, engine)?
    };
    info!(
        "{}: {} balancing paths, total cost {}",
        engine.name(),
        paths.len(),
        paths.iter().map(BalancingPath::cost).sum::<f64>()
    );
    Ok(paths)
}

fn balance_directed(graph: &Graph, engine: &dyn ShortestPath) -> Result<Vec<BalancingPath>> {
    let mut surplus: BTreeMap<VertexId, i64> = BTreeMap::new();
    let mut deficit: BTreeMap<VertexId, i64> = BTreeMap::new();
    for vertex in graph.unbalanced_vertices() {
        let counter = graph.imbalance(&vertex).unwrap_or(0);
        if counter > 0 {
            surplus.insert(vertex, counter);
        } else if counter < 0 {
            deficit.insert(vertex, -counter);
        }
    }

    let mut trees: BTreeMap<VertexId, SearchTree> = BTreeMap::new();
    let mut paths = Vec::new();

    while !surplus.is_empty() && !deficit.is_empty() {
        let mut best: Option<(VertexId, VertexId, f64)> = None;
        let mut unreachable = None;

        for from in surplus.keys() {
            let tree = trees
                .entry(from.clone())
                .or_insert_with(|| engine.search(graph, from, None));
            for to in deficit.keys() {
                let d = tree.distance(to);
                if !d.is_finite() {
                    unreachable = Some(Error::unreachable(from, to));
                    continue;
                }
                if best.as_ref().map_or(true, |(_, _, cost)| d < *cost) {
                    best = Some((from.clone(), to.clone(), d));
                }
            }
        }

        let Some((from, to, _)) = best else {
            return Err(unreachable.unwrap_or_else(|| no_pair_error(surplus.len())));
        };
        let path = trees
            .get(&from)
            .ok_or_else(|| Error::unreachable(&from, &to))?
            .path_to(&to)?;
        debug!("balancing {from} -> {to}, cost {}", path.cost());

        take_slot(&mut surplus, &from);
        take_slot(&mut deficit, &to);
        paths.push(BalancingPath::new(from, to, path));
    }

    if !surplus.is_empty() || !deficit.is_empty() {
        return Err(Error::configuration(format!(
            "imbalance cannot be fully paired: {} surplus and {} deficit vertices left",
            surplus.len(),
            deficit.len()
        )));
    }
    Ok(paths)
}

fn balance_undirected(graph: &Graph, engine: &dyn ShortestPath) -> Result<Vec<BalancingPath>> {
    let mut open: BTreeSet<VertexId> = graph.unbalanced_vertices().into_iter().collect();
    let mut trees: BTreeMap<VertexId, SearchTree> = BTreeMap::new();
    let mut paths = Vec::new();

    while open.len() >= 2 {
        let mut best: Option<(VertexId, VertexId, f64)> = None;
        let mut unreachable = None;

        for (i, from) in open.iter().enumerate() {
            let tree = trees
                .entry(from.clone())
                .or_insert_with(|| engine.search(graph, from, None));
            for to in open.iter().skip(i + 1) {
                let d = tree.distance(to);
                if !d.is_finite() {
                    unreachable = Some(Error::unreachable(from, to));
                    continue;
                }
                if best.as_ref().map_or(true, |(_, _, cost)| d < *cost) {
                    best = Some((from.clone(), to.clone(), d));
                }
            }
        }

        let Some((from, to, _)) = best else {
            return Err(unreachable.unwrap_or_else(|| no_pair_error(open.len())));
        };
        let path = trees
            .get(&from)
            .ok_or_else(|| Error::unreachable(&from, &to))?
            .path_to(&to)?;
        debug!("balancing {from} -- {to}, cost {}", path.cost());

        open.remove(&from);
        open.remove(&to);
        paths.push(BalancingPath::new(from, to, path));
    }

    if let Some(left) = open.first() {
        return Err(Error::configuration(format!(
            "odd-degree vertex {left} has no partner"
        )));
    }
    Ok(paths)
}

fn take_slot(slots: &mut BTreeMap<VertexId, i64>, vertex: &VertexId) {
    if let Some(remaining) = slots.get_mut(vertex) {
        *remaining -= 1;
        if *remaining <= 0 {
            slots.remove(vertex);
        }
    }
}

fn no_pair_error(left: usize) -> Error {
    Error::configuration(format!("no valid balancing pair among {left} vertices"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortest_path::{DijkstraHeap, DijkstraScan, FrontierRelaxation};

    fn v(id: &str) -> VertexId {
        VertexId::from(id)
    }

    fn ids(path: &BalancingPath) -> Vec<&str> {
        path.path.vertices().iter().map(VertexId::as_str).collect()
    }

    #[test]
    fn test_balanced_graph_needs_nothing() {
        let g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "A", 1.0)]).expect("valid");
        let paths = greedy_balancing(&g, &DijkstraHeap).expect("balanced");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_directed_surplus_to_deficit() {
        // A: -1, C: +1 once A -> C is added on top of the triangle.
        let g = Graph::from_edges(
            true,
            [("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 5.0), ("A", "C", 1.0)],
        )
        .expect("valid");
        let paths = greedy_balancing(&g, &DijkstraScan).expect("reachable");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].from, v("C"));
        assert_eq!(paths[0].to, v("A"));
        assert_eq!(ids(&paths[0]), vec!["C", "A"]);
        assert_eq!(paths[0].cost(), 5.0);
    }

    #[test]
    fn test_directed_multiple_slots() {
        // Star: A sends three edges out, each leaf sends back into a hub H.
        let g = Graph::from_edges(
            true,
            [
                ("A", "X", 1.0),
                ("A", "Y", 1.0),
                ("A", "Z", 1.0),
                ("X", "H", 1.0),
                ("Y", "H", 1.0),
                ("Z", "H", 1.0),
                ("H", "A", 2.0),
            ],
        )
        .expect("valid");
        assert_eq!(g.imbalance(&v("A")), Some(-2));
        assert_eq!(g.imbalance(&v("H")), Some(2));
        let paths = greedy_balancing(&g, &DijkstraHeap).expect("reachable");
        assert_eq!(paths.len(), 2);
        for p in &paths {
            assert_eq!(p.from, v("H"));
            assert_eq!(p.to, v("A"));
            assert_eq!(p.cost(), 2.0);
        }
    }

    #[test]
    fn test_undirected_picks_cheapest_pairs() {
        // Odd vertices: A, D (leaves), M (degree 3), N (leaf).
        let g = Graph::from_edges(
            false,
            [
                ("A", "B", 1.0),
                ("C", "D", 1.0),
                ("B", "M", 10.0),
                ("M", "C", 10.0),
                ("M", "N", 1.0),
            ],
        )
        .expect("valid");
        assert_eq!(g.unbalanced_vertices(), vec![v("A"), v("D"), v("M"), v("N")]);

        let paths = greedy_balancing(&g, &FrontierRelaxation::default()).expect("reachable");
        assert_eq!(paths.len(), 2);
        assert_eq!((paths[0].from.as_str(), paths[0].to.as_str()), ("M", "N"));
        assert_eq!(paths[0].cost(), 1.0);
        assert_eq!((paths[1].from.as_str(), paths[1].to.as_str()), ("A", "D"));
        assert_eq!(ids(&paths[1]), vec!["A", "B", "M", "C", "D"]);
        assert_eq!(paths[1].cost(), 22.0);
    }

    #[test]
    fn test_unreachable_pair_tolerated_when_alternative_exists() {
        // Two disjoint directed pairs; cross pairs are unreachable and skipped.
        let g = Graph::from_edges(
            true,
            [("A", "B", 1.0), ("B", "A", 1.0), ("A", "B", 1.0), ("D", "C", 1.0), ("C", "D", 1.0), ("D", "C", 1.0)],
        )
        .expect("valid");
        // A: -1, B: +1, D: -1, C: +1. B -> D and C -> A are unreachable.
        let paths = greedy_balancing(&g, &DijkstraHeap).expect("each side pairs locally");
        assert_eq!(paths.len(), 2);
        assert_eq!((paths[0].from.as_str(), paths[0].to.as_str()), ("B", "A"));
        assert_eq!((paths[1].from.as_str(), paths[1].to.as_str()), ("C", "D"));
    }

    #[test]
    fn test_unreachable_without_alternative_is_fatal() {
        // A -> B and C -> D: surplus B, D; deficit A, C; nothing reaches back.
        let g = Graph::from_edges(true, [("A", "B", 1.0), ("C", "D", 1.0)]).expect("valid");
        let err = greedy_balancing(&g, &DijkstraHeap).unwrap_err();
        assert!(matches!(err, Error::UnreachableVertex { .. }));
    }

    #[test]
    fn test_directed_path_cannot_return() {
        let g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "C", 1.0)]).expect("valid");
        let err = greedy_balancing(&g, &DijkstraScan).unwrap_err();
        assert_eq!(err, Error::unreachable(&v("C"), &v("A")));
    }

    #[test]
    fn test_engines_agree_on_pairing_cost() {
        let g = Graph::from_edges(
            false,
            [
                ("A", "B", 3.0),
                ("B", "C", 1.0),
                ("C", "D", 4.0),
                ("D", "A", 1.0),
                ("A", "C", 2.0),
                ("B", "E", 2.0),
            ],
        )
        .expect("valid");
        let costs: Vec<f64> = [
            &DijkstraHeap as &dyn ShortestPath,
            &DijkstraScan,
            &FrontierRelaxation::default(),
        ]
        .iter()
        .map(|engine| {
            greedy_balancing(&g, *engine)
                .expect("connected")
                .iter()
                .map(BalancingPath::cost)
                .sum::<f64>()
        })
        .collect();
        assert!(costs.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-9));
    }
}
