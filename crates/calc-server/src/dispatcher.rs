//! TCP accept loop: one task per connection.
//!
//! Sessions share no mutable state; the only shared resource is the
//! listening socket, which stays with the accept loop. A session that
//! aborts never affects the loop or any other session.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use crate::session::handle_session;

/// Error type for dispatcher start-up.
#[derive(Debug, Error)]
pub enum DispatcherError {
    #[error("bind failed on {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Binds the listening socket.
///
/// # Errors
///
/// Returns [`DispatcherError::BindFailed`] when the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, DispatcherError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| DispatcherError::BindFailed { addr, source })
}

/// Accepts connections forever, spawning one session task per connection.
///
/// Accept errors are logged and the loop continues; a transient failure on
/// one accept must not take the server down.
pub async fn run(listener: TcpListener) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                tokio::spawn(serve_connection(stream, peer));
            }
            Err(e) => warn!("accept failed: {e}"),
        }
    }
}

/// Serves a single connection to completion and closes it.
async fn serve_connection(mut stream: TcpStream, peer: SocketAddr) {
    info!(%peer, "connected");
    match handle_session(&mut stream).await {
        Ok(()) => info!(%peer, "session complete"),
        Err(e) => warn!(%peer, "session aborted: {e}"),
    }
    // Dropping the stream closes the connection either way.
    info!(%peer, "connection closed");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
