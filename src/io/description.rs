//! Node-link graph descriptions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Graph, VertexId};

/// A vertex entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub id: VertexId,
}

/// An edge entry. A missing weight defaults to `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub source: VertexId,
    pub target: VertexId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Serializable description of a graph in node-link form.
///
/// Nodes without links become isolated vertices; links may name vertices
/// that are not listed as nodes.
///
/// # Examples
///
/// ```
/// use u_postman::io::GraphDescription;
///
/// let json = r#"{
///     "directed": false,
///     "nodes": [{"id": "A"}, {"id": "B"}],
///     "links": [{"source": "A", "target": "B", "weight": 2.0}]
/// }"#;
/// let g = GraphDescription::from_json(json).unwrap().into_graph().unwrap();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub directed: bool,
    /// Informational; parallel edges are always kept.
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub links: Vec<LinkDescription>,
}

impl GraphDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("graph description: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::invalid_input(format!("graph description: {e}")))
    }

    /// Builds the graph, validating every weight.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new(self.directed);
        for node in self.nodes {
            graph.add_vertex(node.id);
        }
        for link in self.links {
            graph.add_real_edge(link.source, link.target, link.weight)?;
        }
        Ok(graph)
    }

    /// Describes the real edges of `graph`. Virtual edges are left out.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            multigraph: true,
            nodes: graph
                .vertices()
                .map(|id| NodeDescription { id: id.clone() })
                .collect(),
            links: graph
                .edges()
                .iter()
                .filter(|e| !e.is_virtual())
                .map(|e| LinkDescription {
                    source: e.source().clone(),
                    target: e.target().clone(),
                    weight: e.weight(),
                })
                .collect(),
        }
    }
}

impl Graph {
    /// Parses a node-link JSON description into a graph.
    pub fn from_json(json: &str) -> Result<Graph> {
        GraphDescription::from_json(json)?.into_graph()
    }
}
