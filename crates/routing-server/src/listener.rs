//! TCP listener/acceptor: binds with an explicit backlog (spec §4.10
//! requires ≥ 64) and spawns a dedicated handler thread per accepted
//! connection.
//!
//! `std::net::TcpListener` has no way to set the listen backlog directly,
//! so the socket is built and configured through `socket2` — the same
//! crate the pack's network-facing services reach for — then converted
//! into a plain `std::net::TcpListener` for the accept loop.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

use log::{error, info};
use socket2::{Domain, Socket, Type};

use routing_engine::Engine;

use crate::error::ServerError;
use crate::handler::handle_connection;

/// Bind a listening socket at `addr` with the given backlog.
pub fn bind(addr: &str, backlog: u32) -> Result<TcpListener, ServerError> {
    let socket_addr: SocketAddr = addr.parse().map_err(|_| ServerError::Bind {
        addr: addr.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid socket address"),
    })?;

    let domain = if socket_addr.is_ipv6() { Domain::IPV6 } else { Domain::IPV4 };
    let socket = Socket::new(domain, Type::STREAM, None).map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    socket.set_reuse_address(true).map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    socket.bind(&socket_addr.into()).map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    socket
        .listen(backlog.max(64) as i32)
        .map_err(|source| ServerError::Bind { addr: addr.to_string(), source })?;

    Ok(socket.into())
}

/// Accept connections forever, spawning one handler thread per connection.
/// Accept errors are logged and the listener continues (spec §4.10).
pub fn serve(listener: TcpListener, engine: Arc<Engine>) -> ! {
    info!(
        "listening on {}",
        listener.local_addr().map(|a| a.to_string()).unwrap_or_default()
    );

    loop {
        match listener.accept() {
            Ok((stream, peer)) => {
                let engine = Arc::clone(&engine);
                let spawned = thread::Builder::new()
                    .name(format!("conn-{peer}"))
                    .spawn(move || handle_connection(stream, &engine));
                if let Err(e) = spawned {
                    error!("failed to spawn handler thread for {peer}: {e}");
                }
            }
            Err(e) => {
                error!("accept error: {e}");
            }
        }
    }
}
