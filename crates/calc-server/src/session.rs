//! Per-connection session handling.
//!
//! A session serves exactly one heartbeat exchange followed by one operation
//! exchange, then ends:
//!
//! ```text
//! AwaitHeartbeat ── heartbeat ok, reply sent ──▶ AwaitOperation
//! AwaitOperation ── request ok, response sent ─▶ Done
//! any state      ── short read / bad frame / bad content ─▶ Aborted
//! ```
//!
//! `Aborted` means the handler returns an error and the caller drops the
//! connection; nothing further is read or written on it. The protocol has no
//! loop and no keep-alive.

use calc_core::domain::eval;
use calc_core::protocol::messages::{
    CLIENT_GREETING, HEARTBEAT_FRAME_SIZE, HEARTBEAT_MESSAGE_TYPE, OPERATION_MESSAGE_TYPE,
    OP_REQUEST_FRAME_SIZE, SERVER_GREETING,
};
use calc_core::protocol::{codec, transport, ProtocolError};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

/// Errors that abort a single session. None of them is fatal to the process.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A frame failed to decode (bad header, short frame, bad payload).
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),

    /// An I/O error occurred on the established connection.
    #[error("connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame decoded cleanly but carried the wrong message_type for the
    /// current handshake step.
    #[error("unexpected message type: expected {expected}, got {actual}")]
    UnexpectedMessageType { expected: i32, actual: i32 },

    /// The heartbeat text did not match the expected greeting.
    #[error("handshake content mismatch: expected {expected:?}, got {actual:?}")]
    ContentMismatch { expected: &'static str, actual: String },
}

/// Drives one connection through the heartbeat and operation exchanges.
///
/// Reads and writes are strictly sequenced: a 21-byte heartbeat frame, the
/// 21-byte reply, a 14-byte operation request, the 17-byte response. Any
/// short read, decode failure, or content mismatch aborts the session; the
/// caller closes the connection and no further messages flow.
///
/// Generic over the stream so tests can drive it with in-memory pipes.
///
/// # Errors
///
/// Returns [`SessionError`] describing why the session aborted.
pub async fn handle_session<S>(stream: &mut S) -> Result<(), SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    // AwaitHeartbeat
    let frame = transport::read_frame(stream, HEARTBEAT_FRAME_SIZE).await?;
    let heartbeat = codec::decode_heartbeat(&frame)?;
    if heartbeat.message_type != HEARTBEAT_MESSAGE_TYPE {
        return Err(SessionError::UnexpectedMessageType {
            expected: HEARTBEAT_MESSAGE_TYPE,
            actual: heartbeat.message_type,
        });
    }
    if !heartbeat.text.eq_ignore_ascii_case(CLIENT_GREETING) {
        return Err(SessionError::ContentMismatch {
            expected: CLIENT_GREETING,
            actual: heartbeat.text,
        });
    }

    let reply = codec::encode_heartbeat(HEARTBEAT_MESSAGE_TYPE, SERVER_GREETING);
    transport::write_frame(stream, &reply).await?;
    debug!("heartbeat exchange complete");

    // AwaitOperation
    let frame = transport::read_frame(stream, OP_REQUEST_FRAME_SIZE).await?;
    let request = codec::decode_operation_request(&frame)?;
    if request.message_type != OPERATION_MESSAGE_TYPE {
        return Err(SessionError::UnexpectedMessageType {
            expected: OPERATION_MESSAGE_TYPE,
            actual: request.message_type,
        });
    }

    let result = eval::evaluate(request.op_code, request.operand1, request.operand2);
    info!(
        op_code = request.op_code,
        operand1 = request.operand1,
        operand2 = request.operand2,
        result,
        "operation served"
    );

    let response = codec::encode_operation_response(OPERATION_MESSAGE_TYPE, result);
    transport::write_frame(stream, &response).await?;

    // Done
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
