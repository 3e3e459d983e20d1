//! Binary codec for RemoteCalc frames.
//!
//! Wire format (all multi-byte integers big-endian):
//! ```text
//! header:              [magic "CALC":4][version:1]
//! heartbeat payload:   [message_type:4][text:16, zero-padded UTF-8]        → 21 bytes total
//! op request payload:  [message_type:4][op_code:1][operand1:4][operand2:4] → 14 bytes total
//! op response payload: [message_type:4][result:8]                          → 17 bytes total
//! ```
//! Encoding is infallible; decoding validates the header before touching any
//! payload byte. The codec performs no I/O and keeps no state.

use thiserror::Error;

use super::messages::{
    Heartbeat, OperationRequest, OperationResponse, HEADER_SIZE, HEARTBEAT_FRAME_SIZE,
    HEARTBEAT_TEXT_SIZE, MAGIC_BYTES, OP_REQUEST_FRAME_SIZE, OP_RESPONSE_FRAME_SIZE,
    PROTOCOL_VERSION,
};

/// Errors that can occur while decoding a frame.
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    /// The frame does not open with the expected magic bytes and version.
    #[error("invalid frame header")]
    InvalidHeader,

    /// The input is shorter than the fixed frame length. Also produced when
    /// the transport hands over a short buffer after the peer closed.
    #[error("short frame: need {needed} bytes, got {available}")]
    ShortRead { needed: usize, available: usize },

    /// The payload bytes could not be interpreted (e.g. invalid UTF-8 in the
    /// heartbeat text field).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

// ── Header ────────────────────────────────────────────────────────────────────

/// Encodes the 5-byte metadata header present on every frame.
pub fn encode_header() -> [u8; HEADER_SIZE] {
    let mut buf = [0u8; HEADER_SIZE];
    buf[..4].copy_from_slice(&MAGIC_BYTES);
    buf[4] = PROTOCOL_VERSION;
    buf
}

/// Decodes and validates the metadata header.
///
/// Every frame decode performs this check first; a magic or version mismatch
/// fails the whole decode before any payload byte is interpreted.
///
/// # Errors
///
/// [`ProtocolError::InvalidHeader`] on magic/version mismatch,
/// [`ProtocolError::ShortRead`] when fewer than 5 bytes are available.
pub fn decode_header(data: &[u8]) -> Result<([u8; 4], u8), ProtocolError> {
    require_len(data, HEADER_SIZE)?;
    let magic = [data[0], data[1], data[2], data[3]];
    let version = data[4];
    if magic != MAGIC_BYTES || version != PROTOCOL_VERSION {
        return Err(ProtocolError::InvalidHeader);
    }
    Ok((magic, version))
}

// ── Heartbeat ─────────────────────────────────────────────────────────────────

/// Encodes a heartbeat frame (21 bytes).
///
/// Text longer than 16 UTF-8 bytes is silently truncated; shorter text is
/// right-padded with zero bytes. The message_type is not validated here.
pub fn encode_heartbeat(message_type: i32, text: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEARTBEAT_FRAME_SIZE);
    buf.extend_from_slice(&encode_header());
    buf.extend_from_slice(&message_type.to_be_bytes());

    let truncated = truncate_to_char_boundary(text, HEARTBEAT_TEXT_SIZE);
    let mut field = [0u8; HEARTBEAT_TEXT_SIZE];
    field[..truncated.len()].copy_from_slice(truncated.as_bytes());
    buf.extend_from_slice(&field);
    buf
}

/// Decodes a heartbeat frame.
///
/// Trailing zero bytes are stripped from the text field before UTF-8
/// decoding.
///
/// # Errors
///
/// [`ProtocolError::ShortRead`] if fewer than 21 bytes are available,
/// [`ProtocolError::InvalidHeader`] on header mismatch, and
/// [`ProtocolError::MalformedPayload`] if the text bytes are not valid UTF-8.
pub fn decode_heartbeat(data: &[u8]) -> Result<Heartbeat, ProtocolError> {
    require_len(data, HEARTBEAT_FRAME_SIZE)?;
    decode_header(data)?;

    let message_type = read_i32(data, HEADER_SIZE);
    let field = &data[HEADER_SIZE + 4..HEARTBEAT_FRAME_SIZE];
    let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let text = std::str::from_utf8(&field[..end])
        .map_err(|e| ProtocolError::MalformedPayload(format!("invalid UTF-8 in heartbeat text: {e}")))?
        .to_string();

    Ok(Heartbeat { message_type, text })
}

// ── Operation request ─────────────────────────────────────────────────────────

/// Encodes an operation request frame (14 bytes).
///
/// The op_code is not range-checked at encode time; out-of-range selectors
/// travel as-is and evaluate to 0 on the server.
pub fn encode_operation_request(
    message_type: i32,
    op_code: u8,
    operand1: i32,
    operand2: i32,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(OP_REQUEST_FRAME_SIZE);
    buf.extend_from_slice(&encode_header());
    buf.extend_from_slice(&message_type.to_be_bytes());
    buf.push(op_code);
    buf.extend_from_slice(&operand1.to_be_bytes());
    buf.extend_from_slice(&operand2.to_be_bytes());
    buf
}

/// Decodes an operation request frame.
///
/// # Errors
///
/// [`ProtocolError::ShortRead`] if fewer than 14 bytes are available,
/// [`ProtocolError::InvalidHeader`] on header mismatch.
pub fn decode_operation_request(data: &[u8]) -> Result<OperationRequest, ProtocolError> {
    require_len(data, OP_REQUEST_FRAME_SIZE)?;
    decode_header(data)?;

    let message_type = read_i32(data, HEADER_SIZE);
    let op_code = data[HEADER_SIZE + 4];
    let operand1 = read_i32(data, HEADER_SIZE + 5);
    let operand2 = read_i32(data, HEADER_SIZE + 9);

    Ok(OperationRequest {
        message_type,
        op_code,
        operand1,
        operand2,
    })
}

// ── Operation response ────────────────────────────────────────────────────────

/// Encodes an operation response frame (17 bytes).
pub fn encode_operation_response(message_type: i32, result: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(OP_RESPONSE_FRAME_SIZE);
    buf.extend_from_slice(&encode_header());
    buf.extend_from_slice(&message_type.to_be_bytes());
    buf.extend_from_slice(&result.to_be_bytes());
    buf
}

/// Decodes an operation response frame.
///
/// # Errors
///
/// [`ProtocolError::ShortRead`] if fewer than 17 bytes are available,
/// [`ProtocolError::InvalidHeader`] on header mismatch.
pub fn decode_operation_response(data: &[u8]) -> Result<OperationResponse, ProtocolError> {
    require_len(data, OP_RESPONSE_FRAME_SIZE)?;
    decode_header(data)?;

    let message_type = read_i32(data, HEADER_SIZE);
    let result = read_i64(data, HEADER_SIZE + 4);

    Ok(OperationResponse {
        message_type,
        result,
    })
}

// ── Utility helpers ───────────────────────────────────────────────────────────

fn require_len(data: &[u8], needed: usize) -> Result<(), ProtocolError> {
    if data.len() < needed {
        return Err(ProtocolError::ShortRead {
            needed,
            available: data.len(),
        });
    }
    Ok(())
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_i64(data: &[u8], offset: usize) -> i64 {
    i64::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
        data[offset + 4],
        data[offset + 5],
        data[offset + 6],
        data[offset + 7],
    ])
}

/// Truncates `text` to at most `max` UTF-8 bytes without splitting a code
/// point.
///
/// Slicing the raw encoding at the byte limit could cut a multi-byte code
/// point in half and leave an undecodable tail in the field; backing off to
/// the nearest char boundary keeps every encoded heartbeat decodable.
fn truncate_to_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
