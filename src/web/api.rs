use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::coloring::{color_count, vertex_coloring};
use crate::algorithm::components::connected_components;
use crate::algorithm::dijkstra::shortest_path;
use crate::algorithm::euler::eulerian_tour;
use crate::algorithm::heuristic::hamiltonian_cycle;
use crate::algorithm::matching::maximum_matching;
use crate::algorithm::spanning_tree::minimum_spanning_tree;
use crate::graph::generators::{generate_complete, generate_cycle, generate_grid, generate_random};
use crate::graph::Graph;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    /// Largest graph a session may hold
    pub max_nodes: usize,
}

impl AppState {
    pub fn new(max_sessions: usize, max_nodes: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            max_nodes,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, Error> {
        self.sessions.lock().map_err(|_| Error::LockPoisoned)
    }

    /// Runs `f` against one session while holding the lock
    fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(Error::SessionNotFound(session_id))?;
        f(session)
    }
}

/// Maps library errors onto HTTP responses
fn api_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::SessionNotFound(_) => (StatusCode::NOT_FOUND, "session_not_found"),
        Error::InvalidVertex(_) => (StatusCode::NOT_FOUND, "node_not_found"),
        Error::InvalidEdge(_, _) => (StatusCode::NOT_FOUND, "edge_not_found"),
        Error::SelfLoop(_) => (StatusCode::UNPROCESSABLE_ENTITY, "self_loop"),
        Error::NegativeWeight(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_weight"),
        Error::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "invalid_algorithm"),
        Error::MissingParameter { .. } => (StatusCode::BAD_REQUEST, "missing_parameter"),
        Error::UnknownGraphType(_) => (StatusCode::BAD_REQUEST, "invalid_graph_type"),
        Error::GraphTooLarge { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "graph_too_large"),
        Error::InvalidGridWidth { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_grid_width"),
        Error::SessionLimitReached(_) => (StatusCode::SERVICE_UNAVAILABLE, "session_limit_reached"),
        Error::LockPoisoned => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/sessions/:session_id/nodes", post(add_node))
        .route("/api/sessions/:session_id/nodes/:node", delete(remove_node))
        .route("/api/sessions/:session_id/edges", post(add_edge))
        .route("/api/sessions/:session_id/edges/:source/:target", delete(remove_edge))
        .route("/api/sessions/:session_id/clear", post(clear_graph))
        .route("/api/sessions/:session_id/generate", post(generate_graph))
        .route("/api/sessions/:session_id/run", post(run_algorithm))
}

/// Create a new session with an empty graph
pub async fn create_session(State(state): State<AppState>) -> ApiResult<SessionView> {
    let mut sessions = state.lock().map_err(api_error)?;
    if sessions.len() >= state.max_sessions {
        return Err(api_error(Error::SessionLimitReached(state.max_sessions)));
    }

    let session = Session::new();
    let view = session.view();
    sessions.insert(session.id, session);
    info!("created session {}", view.id);

    Ok(Json(view))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.lock().map_err(api_error)?;
    let mut session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    session_ids.sort();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionView> {
    state
        .with_session(session_id, |session| Ok(session.view()))
        .map(Json)
        .map_err(api_error)
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.lock().map_err(api_error)?;
    match sessions.remove(&session_id) {
        Some(_) => {
            info!("deleted session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(api_error(Error::SessionNotFound(session_id))),
    }
}

/// Add a node where the canvas was clicked
pub async fn add_node(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddNodeRequest>,
) -> ApiResult<AddNodeResponse> {
    state
        .with_session(session_id, |session| {
            let count = session.graph.vertex_count();
            if count >= state.max_nodes {
                return Err(Error::GraphTooLarge {
                    requested: count + 1,
                    limit: state.max_nodes,
                });
            }
            let id = session.add_node(request.x, request.y);
            debug!("session {}: added node {}", session_id, id);
            Ok(AddNodeResponse { id })
        })
        .map(Json)
        .map_err(api_error)
}

pub async fn remove_node(
    State(state): State<AppState>,
    Path((session_id, node)): Path<(Uuid, usize)>,
) -> ApiResult<WebGraph> {
    state
        .with_session(session_id, |session| {
            session.remove_node(node)?;
            Ok(session.to_web())
        })
        .map(Json)
        .map_err(api_error)
}

pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgeRequest>,
) -> ApiResult<WebGraph> {
    state
        .with_session(session_id, |session| {
            session.add_edge(request.source, request.target, request.weight)?;
            Ok(session.to_web())
        })
        .map(Json)
        .map_err(api_error)
}

pub async fn remove_edge(
    State(state): State<AppState>,
    Path((session_id, source, target)): Path<(Uuid, usize, usize)>,
) -> ApiResult<WebGraph> {
    state
        .with_session(session_id, |session| {
            session.remove_edge(source, target)?;
            Ok(session.to_web())
        })
        .map(Json)
        .map_err(api_error)
}

pub async fn clear_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<WebGraph> {
    state
        .with_session(session_id, |session| {
            session.clear();
            Ok(session.to_web())
        })
        .map(Json)
        .map_err(api_error)
}

/// Replace the session graph with a generated preset
pub async fn generate_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<GraphGenerationRequest>,
) -> ApiResult<WebGraph> {
    let graph = generate(&request, state.max_nodes).map_err(api_error)?;

    state
        .with_session(session_id, |session| {
            session.replace_graph(graph);
            Ok(session.to_web())
        })
        .map(Json)
        .map_err(api_error)
}

/// Run an algorithm on the current graph snapshot
pub async fn run_algorithm(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AlgorithmRequest>,
) -> ApiResult<AlgorithmResponse> {
    let kind: AlgorithmKind = request.algorithm.parse().map_err(api_error)?;

    // Work on a snapshot so the lock is not held while the algorithm runs
    let (graph, revision) = state
        .with_session(session_id, |session| Ok((session.graph.clone(), session.revision)))
        .map_err(api_error)?;

    let start_time = Instant::now();
    let (outcome, highlighted_nodes, highlighted_edges) =
        execute(kind, &graph, &request).map_err(api_error)?;
    let execution_time = start_time.elapsed();

    let response = AlgorithmResponse {
        execution_id: Uuid::new_v4(),
        algorithm: kind.name().to_string(),
        heuristic: kind.is_heuristic(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        outcome,
        highlighted_nodes,
        highlighted_edges,
    };

    debug!(
        "session {}: {} finished in {:.3} ms",
        session_id, response.algorithm, response.execution_time_ms
    );

    let recorded = state
        .with_session(session_id, |session| {
            Ok(session.record_result(revision, response.clone()))
        })
        .map_err(api_error)?;
    if !recorded {
        debug!(
            "session {}: graph edited during {}, result not kept",
            session_id, response.algorithm
        );
    }

    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Builds the requested preset, refusing anything over `max_nodes`
fn generate(request: &GraphGenerationRequest, max_nodes: usize) -> Result<SessionGraph, Error> {
    let graph_type: GraphType = request.graph_type.parse()?;
    let node_count = request.node_count;
    let too_large = |requested| Error::GraphTooLarge {
        requested,
        limit: max_nodes,
    };

    if node_count > max_nodes {
        return Err(too_large(node_count));
    }

    let graph = match graph_type {
        GraphType::Cycle => generate_cycle(node_count),
        GraphType::Complete => generate_complete(node_count),
        GraphType::Grid => {
            let width = match request.width {
                Some(width) if width == 0 || width > node_count => {
                    return Err(Error::InvalidGridWidth { width, node_count });
                }
                Some(width) => width,
                None => ((node_count as f64).sqrt().ceil() as usize).max(1),
            };
            // The last row is filled out, so a grid may round up past node_count
            let height = node_count.div_ceil(width);
            if width * height > max_nodes {
                return Err(too_large(width * height));
            }
            generate_grid(width, height)
        }
        GraphType::Random => {
            let mut rng = match request.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            generate_random(node_count, request.edge_probability, &mut rng)
        }
    };

    Ok(graph)
}

type Highlights = (AlgorithmOutcome, Vec<usize>, Vec<(usize, usize)>);

fn execute(kind: AlgorithmKind, graph: &SessionGraph, request: &AlgorithmRequest) -> Result<Highlights, Error> {
    let required = |value: Option<usize>, parameter: &'static str| {
        value.ok_or(Error::MissingParameter {
            algorithm: kind.name(),
            parameter,
        })
    };

    let highlights = match kind {
        AlgorithmKind::ShortestPath => {
            let source = required(request.source, "source")?;
            let target = required(request.target, "target")?;
            let result = shortest_path(graph, source, target);
            let edges = consecutive_pairs(&result.path, false);
            let distance = result.is_found().then(|| result.distance.into_inner());
            (
                AlgorithmOutcome::ShortestPath {
                    path: result.path.clone(),
                    distance,
                },
                result.path,
                edges,
            )
        }
        AlgorithmKind::MinimumSpanningTree => {
            let tree = minimum_spanning_tree(graph);
            let edges: Vec<WebEdge> = tree
                .edges()
                .into_iter()
                .map(|(source, target, weight)| WebEdge {
                    source,
                    target,
                    weight: weight.into_inner(),
                })
                .collect();
            let highlighted = edges.iter().map(|e| (e.source, e.target)).collect();
            (
                AlgorithmOutcome::SpanningTree {
                    edges,
                    total_weight: tree.total_weight().into_inner(),
                },
                Vec::new(),
                highlighted,
            )
        }
        AlgorithmKind::VertexColoring => {
            let colors = vertex_coloring(graph);
            let color_count = color_count(&colors);
            let nodes = colors.keys().copied().collect();
            (
                AlgorithmOutcome::Coloring {
                    colors,
                    color_count,
                },
                nodes,
                Vec::new(),
            )
        }
        AlgorithmKind::EulerianTour => {
            let tour = eulerian_tour(graph);
            let edges = tour.clone().unwrap_or_default();
            (AlgorithmOutcome::EulerianTour { tour }, Vec::new(), edges)
        }
        AlgorithmKind::HamiltonianCycle => {
            let cycle = hamiltonian_cycle(graph);
            let (nodes, edges) = match &cycle {
                Some(cycle) => (cycle.clone(), consecutive_pairs(cycle, true)),
                None => (Vec::new(), Vec::new()),
            };
            (AlgorithmOutcome::HamiltonianCycle { cycle }, nodes, edges)
        }
        AlgorithmKind::MaximumMatching => {
            let pairs: Vec<(usize, usize)> = maximum_matching(graph).into_iter().collect();
            let nodes = pairs.iter().flat_map(|&(u, v)| [u, v]).collect();
            (
                AlgorithmOutcome::Matching {
                    pairs: pairs.clone(),
                },
                nodes,
                pairs,
            )
        }
        AlgorithmKind::ConnectedComponents => {
            let components = connected_components(graph);
            (
                AlgorithmOutcome::Components { components },
                Vec::new(),
                Vec::new(),
            )
        }
    };

    Ok(highlights)
}

/// Adjacent pairs of a node sequence, optionally closing the loop
fn consecutive_pairs(nodes: &[usize], closed: bool) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = nodes.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && nodes.len() > 2 {
        if let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) {
            pairs.push((last, first));
        }
    }
    pairs
}
