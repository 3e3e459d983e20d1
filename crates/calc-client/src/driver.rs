//! Client-side exchange driver.
//!
//! Drives the mirror image of the server's session: send the hello
//! heartbeat, check the reply, send one operation request, read the result.
//! On any failure the exchange is abandoned and the error is surfaced to the
//! caller; there are no retries and no partial results.

use std::net::SocketAddr;

use calc_core::protocol::messages::{
    CLIENT_GREETING, HEARTBEAT_FRAME_SIZE, HEARTBEAT_MESSAGE_TYPE, OPERATION_MESSAGE_TYPE,
    OP_RESPONSE_FRAME_SIZE, SERVER_GREETING,
};
use calc_core::protocol::{codec, transport, ProtocolError};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Errors that abandon a client exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The TCP connection to the server could not be established.
    #[error("failed to connect to server at {addr}: {source}")]
    ConnectFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// A frame failed to decode (bad header, short frame, bad payload).
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),

    /// An I/O error occurred on the established connection.
    #[error("connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The heartbeat reply carried the wrong message_type.
    #[error("unexpected message type: expected {expected}, got {actual}")]
    UnexpectedMessageType { expected: i32, actual: i32 },

    /// The heartbeat reply text did not match the expected greeting.
    #[error("handshake content mismatch: expected {expected:?}, got {actual:?}")]
    ContentMismatch { expected: &'static str, actual: String },
}

/// Runs the client half of the exchange on an established stream.
///
/// Sends the hello heartbeat, requires the reply to carry message_type 0 and
/// the server greeting (case-insensitive), then sends the operation request
/// and returns the decoded result. The response's message_type is
/// deliberately not validated; only the result is read.
///
/// Generic over the stream so tests can drive it with in-memory pipes.
///
/// # Errors
///
/// Returns [`ClientError`] describing why the exchange was abandoned.
pub async fn run_exchange<S>(
    stream: &mut S,
    op_code: u8,
    operand1: i32,
    operand2: i32,
) -> Result<i64, ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let hello = codec::encode_heartbeat(HEARTBEAT_MESSAGE_TYPE, CLIENT_GREETING);
    transport::write_frame(stream, &hello).await?;

    let frame = transport::read_frame(stream, HEARTBEAT_FRAME_SIZE).await?;
    let reply = codec::decode_heartbeat(&frame)?;
    if reply.message_type != HEARTBEAT_MESSAGE_TYPE {
        return Err(ClientError::UnexpectedMessageType {
            expected: HEARTBEAT_MESSAGE_TYPE,
            actual: reply.message_type,
        });
    }
    if !reply.text.eq_ignore_ascii_case(SERVER_GREETING) {
        return Err(ClientError::ContentMismatch {
            expected: SERVER_GREETING,
            actual: reply.text,
        });
    }
    debug!("heartbeat accepted");

    let request = codec::encode_operation_request(OPERATION_MESSAGE_TYPE, op_code, operand1, operand2);
    transport::write_frame(stream, &request).await?;

    let frame = transport::read_frame(stream, OP_RESPONSE_FRAME_SIZE).await?;
    let response = codec::decode_operation_response(&frame)?;
    Ok(response.result)
}

/// Connects to `addr` and performs one complete calculation exchange.
///
/// # Errors
///
/// Returns [`ClientError::ConnectFailed`] if the connection cannot be
/// established, or any [`ClientError`] from the exchange itself.
pub async fn calculate(
    addr: SocketAddr,
    op_code: u8,
    operand1: i32,
    operand2: i32,
) -> Result<i64, ClientError> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| ClientError::ConnectFailed { addr, source })?;
    info!("connected to {addr}");

    let result = run_exchange(&mut stream, op_code, operand1, operand2).await?;
    // The stream drops here; the connection closes after its one operation.
    Ok(result)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
