//! Line protocol: parses one request line (text or JSON) and formats one
//! response line, matching the framing the request arrived in.
//!
//! # Text framing
//!
//! ```text
//! REQ <src> <dst>            -> ROUTE2 <cost> <nnodes> <n0> .. <nedges> <e0> ..
//! UPD <edge> <speed>         -> ACK
//! UPD <edge> <speed> <pos>   -> ACK (pos ignored by the core)
//! PRED <edge>                -> PRED <edge> <time>
//! ```
//!
//! # JSON framing
//!
//! A single JSON object per line, sniffed by its first non-whitespace
//! byte (`{` selects JSON, anything else selects text — spec §6).

use serde::{Deserialize, Serialize};

use routing_core::{EdgeId, NodeId};
use routing_engine::EngineError;
use routing_graph::{GraphError, Route};

// ── Parsed request ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Route { src: NodeId, dst: NodeId },
    Update { edge: EdgeId, speed: f64 },
    Predict { edge: EdgeId },
}

/// Protocol-level parse failure — never enqueued as a task (spec §4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand,
}

impl ParseError {
    pub fn code(self) -> &'static str {
        match self {
            ParseError::Empty => "EMPTY",
            ParseError::UnknownCommand => "UNKNOWN_CMD",
        }
    }
}

/// Parse one line (already stripped of its trailing `\n`/`\r`) into a
/// `(Request, Framing)` pair.
pub fn parse_line(line: &str) -> Result<(Request, Framing), ParseError> {
    let trimmed = line.trim_end_matches('\r');
    let first_non_ws = trimmed.trim_start();
    if first_non_ws.is_empty() {
        return Err(ParseError::Empty);
    }

    if first_non_ws.starts_with('{') {
        parse_json(first_non_ws).map(|req| (req, Framing::Json))
    } else {
        parse_text(first_non_ws).map(|req| (req, Framing::Text))
    }
}

fn parse_text(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().ok_or(ParseError::Empty)?;

    match cmd {
        "REQ" => {
            let src = parse_node(parts.next())?;
            let dst = parse_node(parts.next())?;
            Ok(Request::Route { src, dst })
        }
        "UPD" => {
            let edge = parse_edge(parts.next())?;
            let speed = parse_f64(parts.next())?;
            // A trailing <pos> field is accepted and ignored by the core.
            Ok(Request::Update { edge, speed })
        }
        "PRED" => {
            let edge = parse_edge(parts.next())?;
            Ok(Request::Predict { edge })
        }
        _ => Err(ParseError::UnknownCommand),
    }
}

fn parse_node(s: Option<&str>) -> Result<NodeId, ParseError> {
    s.and_then(|s| s.parse::<u32>().ok())
        .map(NodeId)
        .ok_or(ParseError::UnknownCommand)
}

fn parse_edge(s: Option<&str>) -> Result<EdgeId, ParseError> {
    s.and_then(|s| s.parse::<u32>().ok())
        .map(EdgeId)
        .ok_or(ParseError::UnknownCommand)
}

fn parse_f64(s: Option<&str>) -> Result<f64, ParseError> {
    s.and_then(|s| s.parse::<f64>().ok())
        .ok_or(ParseError::UnknownCommand)
}

// ── JSON request framing ──────────────────────────────────────────────────────

/// `{user_id, car_id, start_node, destination_node, timestamp}` per spec §6.
#[derive(Deserialize)]
struct JsonRouteRequest {
    start_node: u32,
    destination_node: u32,
}

/// `{user_id, car_id, timestamp, edge_id, position_on_edge, speed}`.
#[derive(Deserialize)]
struct JsonUpdateRequest {
    edge_id: u32,
    speed: f64,
}

#[derive(Deserialize)]
struct JsonPredictRequest {
    edge_id: u32,
}

fn parse_json(line: &str) -> Result<Request, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|_| ParseError::UnknownCommand)?;

    if value.get("start_node").is_some() && value.get("destination_node").is_some() {
        let req: JsonRouteRequest =
            serde_json::from_value(value).map_err(|_| ParseError::UnknownCommand)?;
        return Ok(Request::Route {
            src: NodeId(req.start_node),
            dst: NodeId(req.destination_node),
        });
    }

    if value.get("edge_id").is_some() && value.get("speed").is_some() {
        let req: JsonUpdateRequest =
            serde_json::from_value(value).map_err(|_| ParseError::UnknownCommand)?;
        return Ok(Request::Update {
            edge: EdgeId(req.edge_id),
            speed: req.speed,
        });
    }

    if value.get("edge_id").is_some() {
        let req: JsonPredictRequest =
            serde_json::from_value(value).map_err(|_| ParseError::UnknownCommand)?;
        return Ok(Request::Predict {
            edge: EdgeId(req.edge_id),
        });
    }

    Err(ParseError::UnknownCommand)
}

// ── Response formatting ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonRouteResponse<'a> {
    route_edges: &'a [u32],
    eta: f64,
}

#[derive(Serialize)]
struct JsonAckResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct JsonPredictResponse {
    edge_id: u32,
    eta: f64,
}

#[derive(Serialize)]
struct JsonErrorResponse<'a> {
    error: &'a str,
}

/// Format a successful route response in the given framing.
pub fn format_route(route: &Route, framing: Framing) -> String {
    match framing {
        Framing::Text => {
            let mut tokens = vec!["ROUTE2".to_string(), format!("{:.3}", route.cost)];
            tokens.push(route.nodes.len().to_string());
            tokens.extend(route.nodes.iter().map(|n| n.to_string()));
            tokens.push(route.edges.len().to_string());
            tokens.extend(route.edges.iter().map(|e| e.to_string()));
            tokens.join(" ")
        }
        Framing::Json => {
            let edge_ids: Vec<u32> = route.edges.iter().map(|e| e.0).collect();
            serde_json::to_string(&JsonRouteResponse {
                route_edges: &edge_ids,
                eta: route.cost,
            })
            .expect("route response always serializes")
        }
    }
}

pub fn format_ack(framing: Framing) -> String {
    match framing {
        Framing::Text => "ACK".to_string(),
        Framing::Json => serde_json::to_string(&JsonAckResponse { status: "ACK" })
            .expect("ack response always serializes"),
    }
}

pub fn format_predict(edge: EdgeId, time: f64, framing: Framing) -> String {
    match framing {
        Framing::Text => format!("PRED {edge} {time:.3}"),
        Framing::Json => serde_json::to_string(&JsonPredictResponse {
            edge_id: edge.0,
            eta: time,
        })
        .expect("predict response always serializes"),
    }
}

pub fn format_error(code: &str, framing: Framing) -> String {
    match framing {
        Framing::Text => format!("ERR {code}"),
        Framing::Json => serde_json::to_string(&JsonErrorResponse { error: code })
            .expect("error response always serializes"),
    }
}

/// Map an engine-level domain error to the wire error code from spec §6/§7.
pub fn engine_error_code(err: &EngineError) -> &'static str {
    match err {
        EngineError::Graph(GraphError::NoRoute { .. }) => "NO_ROUTE",
        EngineError::Graph(GraphError::BadNode(_)) => "BAD_NODES",
        EngineError::Graph(GraphError::BadEdge(_)) => "BAD_EDGE",
        EngineError::Graph(GraphError::BadSpeed(_)) => "BAD_SPEED",
        EngineError::Graph(GraphError::Inconsistent { .. }) => "ROUTE_FAIL",
        EngineError::Graph(_) => "ROUTE_FAIL",
        EngineError::WorkerPanic => "INTERNAL",
        EngineError::Disconnected => "INTERNAL",
    }
}
