//! Random connected graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Edge, Graph};

/// Builder for random connected graphs with integer weights.
///
/// Undirected graphs start from a random spanning tree, directed graphs
/// from a ring through every vertex, so the result is connected (strongly
/// connected when directed). Extra edges are then drawn uniformly between
/// distinct vertices. Weights are drawn from `1..=max_weight`.
///
/// # Examples
///
/// ```
/// use u_postman::generate::RandomGraph;
///
/// let g = RandomGraph::default()
///     .with_vertices(6)
///     .with_extra_edges(4)
///     .with_seed(7)
///     .build();
/// assert_eq!(g.vertex_count(), 6);
/// assert_eq!(g.edge_count(), 5 + 4);
/// ```
#[derive(Debug, Clone)]
pub struct RandomGraph {
    vertices: usize,
    extra_edges: usize,
    directed: bool,
    max_weight: u32,
    seed: u64,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            vertices: 10,
            extra_edges: 10,
            directed: false,
            max_weight: 10,
            seed: 42,
        }
    }
}

impl RandomGraph {
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_extra_edges(mut self, extra_edges: usize) -> Self {
        self.extra_edges = extra_edges;
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Upper weight bound; values below 1 are treated as 1.
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(&self) -> Graph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = Graph::new(self.directed);
        let n = self.vertices;
        let name = |i: usize| format!("v{i}");

        for i in 0..n {
            graph.add_vertex(name(i));
        }
        if n < 2 {
            return graph;
        }

        if self.directed {
            for i in 0..n {
                let w = self.weight(&mut rng);
                graph.add_edge(Edge::real(name(i), name((i + 1) % n), w));
            }
        } else {
            for i in 1..n {
                let j = rng.random_range(0..i);
                let w = self.weight(&mut rng);
                graph.add_edge(Edge::real(name(j), name(i), w));
            }
        }

        for _ in 0..self.extra_edges {
            let a = rng.random_range(0..n);
            let mut b = rng.random_range(0..n - 1);
            if b >= a {
                b += 1;
            }
            let w = self.weight(&mut rng);
            graph.add_edge(Edge::real(name(a), name(b), w));
        }

        graph
    }

    fn weight<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(1..=self.max_weight.max(1)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = RandomGraph::default().with_seed(3).build();
        let b = RandomGraph::default().with_seed(3).build();
        let ea: Vec<(String, String, f64)> = a
            .edges()
            .iter()
            .map(|e| (e.source().to_string(), e.target().to_string(), e.weight()))
            .collect();
        let eb: Vec<(String, String, f64)> = b
            .edges()
            .iter()
            .map(|e| (e.source().to_string(), e.target().to_string(), e.weight()))
            .collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn test_undirected_is_connected() {
        let g = RandomGraph::default()
            .with_vertices(20)
            .with_extra_edges(0)
            .with_seed(11)
            .build();
        assert_eq!(g.edge_count(), 19);
        assert!(g.reaches_all_edges_from(&"v0".into()));
    }

    #[test]
    fn test_directed_ring() {
        let g = RandomGraph::default()
            .with_vertices(5)
            .with_extra_edges(0)
            .directed(true)
            .build();
        assert_eq!(g.edge_count(), 5);
        assert!(g.is_eulerian());
    }

    #[test]
    fn test_no_self_loops_and_weight_range() {
        let g = RandomGraph::default()
            .with_vertices(4)
            .with_extra_edges(50)
            .with_max_weight(3)
            .build();
        for e in g.edges() {
            assert_ne!(e.source(), e.target());
            assert!((1.0..=3.0).contains(&e.weight()));
        }
    }

    #[test]
    fn test_tiny_graphs() {
        assert_eq!(RandomGraph::default().with_vertices(0).build().vertex_count(), 0);
        let one = RandomGraph::default().with_vertices(1).build();
        assert_eq!(one.vertex_count(), 1);
        assert_eq!(one.edge_count(), 0);
    }
}
