//! Per-connection handler: reads one line, builds a task, blocks on its
//! completion, writes the response, and loops until EOF or a socket error.
//!
//! Per-connection ordering invariant (spec §4.9): a handler has at most
//! one task in flight at a time, so responses on a single connection are
//! always written in the order their requests arrived — even though tasks
//! from different connections run on worker threads in parallel.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use log::{debug, warn};

use routing_engine::Engine;

use crate::protocol::{
    engine_error_code, format_ack, format_error, format_predict, format_route, parse_line,
    Framing, Request,
};

/// Own a single accepted connection until EOF or an I/O error.
pub fn handle_connection(stream: TcpStream, engine: &Engine) {
    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());

    let reader_stream = match stream.try_clone() {
        Ok(s) => s,
        Err(e) => {
            warn!("{peer}: failed to clone socket for reading: {e}");
            return;
        }
    };
    let mut reader = BufReader::new(reader_stream);
    let mut writer = stream;

    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(n) => n,
            Err(e) => {
                warn!("{peer}: read error: {e}");
                break;
            }
        };
        let _ = bytes_read;

        let response = dispatch(&line, engine);

        if let Err(e) = writer.write_all(response.as_bytes()).and_then(|_| writer.write_all(b"\n"))
        {
            // Connection close cancels future requests but not an
            // already-enqueued task (spec §5) — the task still ran above;
            // we simply discover the broken pipe on write and stop.
            debug!("{peer}: write error, closing connection: {e}");
            break;
        }
    }
}

pub(crate) fn dispatch(line: &str, engine: &Engine) -> String {
    let (request, framing) = match parse_line(line) {
        Ok(parsed) => parsed,
        // A line that fails to parse never established a framing; text is
        // the fallback so the error is always readable over a plain
        // connection (spec §4.9: malformed lines are never enqueued).
        Err(parse_err) => return format_error(parse_err.code(), Framing::Text),
    };

    match request {
        Request::Route { src, dst } => match engine.submit_route(src, dst) {
            Ok(route) => format_route(&route, framing),
            Err(e) => format_error(engine_error_code(&e), framing),
        },
        Request::Update { edge, speed } => match engine.submit_update(edge, speed) {
            Ok(()) => format_ack(framing),
            Err(e) => format_error(engine_error_code(&e), framing),
        },
        Request::Predict { edge } => match engine.submit_predict(edge) {
            Ok(time) => format_predict(edge, time, framing),
            Err(e) => format_error(engine_error_code(&e), framing),
        },
    }
}
