//! Hierholzer's algorithm.
//!
//! # Complexity
//!
//! O(V + E). Every edge is pushed onto the stack once and every stack
//! entry is popped once.

use std::collections::{BTreeMap, VecDeque};

use log::trace;

use crate::error::{Error, Result};
use crate::models::{EdgeId, Graph, VertexId};

/// A closed walk: `vertices[i]` to `vertices[i + 1]` is taken along
/// `edges[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub(super) vertices: Vec<VertexId>,
    pub(super) edges: Vec<EdgeId>,
}

impl Circuit {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of vertices on the walk (edges + 1).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Each move as `(from, to, edge)`.
    pub fn steps(&self) -> impl Iterator<Item = (&VertexId, &VertexId, EdgeId)> {
        self.vertices
            .windows(2)
            .zip(&self.edges)
            .map(|(pair, &edge)| (&pair[0], &pair[1], edge))
    }
}

/// Builds an Eulerian circuit starting and ending at `origin`.
///
/// The graph itself is untouched; the traversal consumes a working copy of
/// the adjacency. Among several unused edges the earliest inserted one is
/// taken. The result is only meaningful on a balanced graph; call
/// [`validate`] to check it.
///
/// # Examples
///
/// ```
/// use u_postman::circuit::build_circuit;
/// use u_postman::models::Graph;
///
/// let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]).unwrap();
/// let circuit = build_circuit(&g, &"A".into()).unwrap();
/// let ids: Vec<&str> = circuit.vertices().iter().map(|v| v.as_str()).collect();
/// assert_eq!(ids, vec!["A", "B", "C", "A"]);
/// ```
pub fn build_circuit(graph: &Graph, origin: &VertexId) -> Result<Circuit> {
    let mut remaining: BTreeMap<&VertexId, VecDeque<EdgeId>> = graph
        .vertices()
        .map(|v| (v, graph.incident_edges(v).iter().copied().collect()))
        .collect();
    let mut used = vec![false; graph.edge_count()];

    let mut stack: Vec<(VertexId, Option<EdgeId>)> = vec![(origin.clone(), None)];
    let mut popped: Vec<(VertexId, Option<EdgeId>)> = Vec::with_capacity(graph.edge_count() + 1);

    while let Some((top, _)) = stack.last() {
        let current = top.clone();
        let next = remaining
            .get_mut(&current)
            .and_then(|queue| take_unused(queue, &used));

        match next {
            Some(edge_id) => {
                used[edge_id.index()] = true;
                let far = graph
                    .edge(edge_id)
                    .and_then(|edge| graph.step_target(edge, &current))
                    .ok_or_else(|| {
                        Error::invalid_circuit(format!(
                            "edge {} cannot be left from {current}",
                            edge_id.index()
                        ))
                    })?;
                stack.push((far.clone(), Some(edge_id)));
            }
            None => {
                if let Some(entry) = stack.pop() {
                    popped.push(entry);
                }
            }
        }
    }

    popped.reverse();
    let edges: Vec<EdgeId> = popped.iter().filter_map(|(_, e)| *e).collect();
    let vertices: Vec<VertexId> = popped.into_iter().map(|(v, _)| v).collect();
    trace!("hierholzer: {} vertices from {origin}", vertices.len());

    Ok(Circuit { vertices, edges })
}

/// Checks that `circuit` starts and ends at `origin` and uses every edge
/// of `graph`.
///
/// A failure means balancing or traversal went wrong; it is never
/// recoverable.
pub fn validate(circuit: &Circuit, graph: &Graph, origin: &VertexId) -> Result<()> {
    let (Some(first), Some(last)) = (circuit.vertices.first(), circuit.vertices.last()) else {
        return Err(Error::invalid_circuit("circuit is empty"));
    };
    if first != origin || last != origin {
        return Err(Error::invalid_circuit(format!(
            "circuit runs from {first} to {last}, expected to start and end at {origin}"
        )));
    }
    let expected = graph.edge_count() + 1;
    if circuit.len() != expected {
        return Err(Error::invalid_circuit(format!(
            "circuit has {} vertices, expected {expected}",
            circuit.len()
        )));
    }
    Ok(())
}

fn take_unused(queue: &mut VecDeque<EdgeId>, used: &[bool]) -> Option<EdgeId> {
    while let Some(id) = queue.pop_front() {
        if !used[id.index()] {
            return Some(id);
        }
    }
    None
}
