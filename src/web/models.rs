use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use uuid::Uuid;

use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// Weight type used by the service
pub type Weight = OrderedFloat<f64>;

/// Graph owned by a session
pub type SessionGraph = UndirectedGraph<Weight>;

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub degree: usize,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// One editable graph plus the canvas positions of its nodes
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub graph: SessionGraph,
    pub positions: HashMap<usize, (f64, f64)>,
    pub last_result: Option<AlgorithmResponse>,
    /// Bumped on every graph edit
    pub revision: u64,
}

impl Session {
    /// Creates a session with an empty graph
    pub fn new() -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            graph: SessionGraph::new(),
            positions: HashMap::new(),
            last_result: None,
            revision: 0,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.revision += 1;
        // Highlights refer to the old graph
        self.last_result = None;
    }

    /// Stores a result computed on the graph as of `revision`.
    /// Returns false and drops the result if the graph changed since.
    pub fn record_result(&mut self, revision: u64, response: AlgorithmResponse) -> bool {
        if revision != self.revision {
            return false;
        }
        self.last_result = Some(response);
        true
    }

    /// Adds a node at a canvas position and returns its ID
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        let id = self.graph.add_vertex();
        self.positions.insert(id, (x, y));
        self.touch();
        id
    }

    /// Removes a node together with its edges
    pub fn remove_node(&mut self, node: usize) -> Result<()> {
        if !self.graph.remove_vertex(node) {
            return Err(Error::InvalidVertex(node));
        }
        self.positions.remove(&node);
        self.touch();
        Ok(())
    }

    /// Connects two nodes; re-adding an existing edge replaces its weight
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> Result<()> {
        for node in [source, target] {
            if !self.graph.has_vertex(node) {
                return Err(Error::InvalidVertex(node));
            }
        }
        if source == target {
            return Err(Error::SelfLoop(source));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::NegativeWeight(weight));
        }
        if !self.graph.add_edge(source, target, OrderedFloat(weight)) {
            return Err(Error::InvalidEdge(source, target));
        }
        self.touch();
        Ok(())
    }

    /// Removes the edge between two nodes
    pub fn remove_edge(&mut self, source: usize, target: usize) -> Result<()> {
        if !self.graph.remove_edge(source, target) {
            return Err(Error::InvalidEdge(source, target));
        }
        self.touch();
        Ok(())
    }

    /// Removes every node and edge
    pub fn clear(&mut self) {
        self.graph.clear();
        self.positions.clear();
        self.touch();
    }

    /// Replaces the graph, placing its nodes on a circle
    pub fn replace_graph(&mut self, graph: SessionGraph) {
        self.positions = circular_layout(&graph);
        self.graph = graph;
        self.touch();
    }

    /// Snapshot for the front end
    pub fn to_web(&self) -> WebGraph {
        let nodes = self
            .graph
            .vertices()
            .map(|id| {
                let (x, y) = self.positions.get(&id).copied().unwrap_or_default();
                WebNode {
                    id,
                    label: id.to_string(),
                    x,
                    y,
                    degree: self.graph.degree(id),
                }
            })
            .collect();

        let links = self
            .graph
            .edges()
            .into_iter()
            .map(|(source, target, weight)| WebEdge {
                source,
                target,
                weight: weight.into_inner(),
            })
            .collect();

        WebGraph { nodes, links }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            graph: self.to_web(),
            last_result: self.last_result.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas used by [`circular_layout`]
const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 500.0;

/// Places nodes evenly on a circle centered in the canvas, in ID order
pub fn circular_layout(graph: &SessionGraph) -> HashMap<usize, (f64, f64)> {
    let n = graph.vertex_count().max(1) as f64;
    let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    let radius = cx.min(cy) * 0.8;

    graph
        .vertices()
        .enumerate()
        .map(|(i, id)| {
            let angle = std::f64::consts::TAU * i as f64 / n;
            (id, (cx + radius * angle.cos(), cy + radius * angle.sin()))
        })
        .collect()
}

/// Serialized view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub graph: WebGraph,
    pub last_result: Option<AlgorithmResponse>,
}

/// A click on the canvas
#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddNodeResponse {
    pub id: usize,
}

#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub source: usize,
    pub target: usize,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    crate::graph::DEFAULT_WEIGHT
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edge_probability() -> f64 {
    0.3
}

/// Preset graphs offered by the generate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    Cycle,
    Complete,
    Grid,
    Random,
}

impl FromStr for GraphType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cycle" => Ok(GraphType::Cycle),
            "complete" => Ok(GraphType::Complete),
            "grid" => Ok(GraphType::Grid),
            "random" => Ok(GraphType::Random),
            other => Err(Error::UnknownGraphType(other.to_string())),
        }
    }
}

/// Algorithms the run endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    ShortestPath,
    MinimumSpanningTree,
    VertexColoring,
    EulerianTour,
    HamiltonianCycle,
    MaximumMatching,
    ConnectedComponents,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::ShortestPath => "shortest-path",
            AlgorithmKind::MinimumSpanningTree => "minimum-spanning-tree",
            AlgorithmKind::VertexColoring => "vertex-coloring",
            AlgorithmKind::EulerianTour => "eulerian-tour",
            AlgorithmKind::HamiltonianCycle => "hamiltonian-cycle",
            AlgorithmKind::MaximumMatching => "maximum-matching",
            AlgorithmKind::ConnectedComponents => "connected-components",
        }
    }

    /// Heuristic results must not be read as proof of absence
    pub fn is_heuristic(self) -> bool {
        matches!(self, AlgorithmKind::HamiltonianCycle)
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shortest-path" | "dijkstra" => Ok(AlgorithmKind::ShortestPath),
            "minimum-spanning-tree" | "mst" => Ok(AlgorithmKind::MinimumSpanningTree),
            "vertex-coloring" => Ok(AlgorithmKind::VertexColoring),
            "eulerian-tour" => Ok(AlgorithmKind::EulerianTour),
            "hamiltonian-cycle" => Ok(AlgorithmKind::HamiltonianCycle),
            "maximum-matching" => Ok(AlgorithmKind::MaximumMatching),
            "connected-components" => Ok(AlgorithmKind::ConnectedComponents),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Parameters for algorithm execution
#[derive(Debug, Deserialize)]
pub struct AlgorithmRequest {
    pub algorithm: String,
    #[serde(default)]
    pub source: Option<usize>,
    #[serde(default)]
    pub target: Option<usize>,
}

/// Algorithm-specific result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmOutcome {
    ShortestPath {
        path: Vec<usize>,
        /// `None` when the target is unreachable
        distance: Option<f64>,
    },
    SpanningTree {
        edges: Vec<WebEdge>,
        total_weight: f64,
    },
    Coloring {
        colors: BTreeMap<usize, usize>,
        color_count: usize,
    },
    EulerianTour {
        tour: Option<Vec<(usize, usize)>>,
    },
    HamiltonianCycle {
        cycle: Option<Vec<usize>>,
    },
    Matching {
        pairs: Vec<(usize, usize)>,
    },
    Components {
        components: Vec<Vec<usize>>,
    },
}

/// Result of running an algorithm, with what the front end should highlight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub heuristic: bool,
    pub execution_time_ms: f64,
    pub outcome: AlgorithmOutcome,
    pub highlighted_nodes: Vec<usize>,
    pub highlighted_edges: Vec<(usize, usize)>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
