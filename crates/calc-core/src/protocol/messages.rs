//! RemoteCalc protocol message shapes and wire-format constants.
//!
//! A frame on the wire is the 5-byte metadata header followed by exactly one
//! fixed-width payload. There are three payload shapes and no others; the
//! protocol defines no delimiters and no length prefixes, so each frame's
//! total size is a compile-time constant.

// ── Protocol constants ────────────────────────────────────────────────────────

/// Magic bytes opening every frame.
pub const MAGIC_BYTES: [u8; 4] = *b"CALC";

/// Current protocol version byte. The only version this revision accepts.
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Size of the metadata header: 4 magic bytes + 1 version byte.
pub const HEADER_SIZE: usize = 5;

/// Width of the fixed heartbeat text field in bytes.
pub const HEARTBEAT_TEXT_SIZE: usize = 16;

/// Total heartbeat frame size: header + i32 message_type + text field.
pub const HEARTBEAT_FRAME_SIZE: usize = HEADER_SIZE + 4 + HEARTBEAT_TEXT_SIZE;

/// Total operation request frame size: header + i32 + u8 + i32 + i32.
pub const OP_REQUEST_FRAME_SIZE: usize = HEADER_SIZE + 4 + 1 + 4 + 4;

/// Total operation response frame size: header + i32 + i64.
pub const OP_RESPONSE_FRAME_SIZE: usize = HEADER_SIZE + 4 + 8;

// ── Handshake conventions ─────────────────────────────────────────────────────
//
// The codec does not enforce any of these values; checking them is the
// session handler's (and client driver's) responsibility.

/// Conventional message_type carried by heartbeat frames in both directions.
pub const HEARTBEAT_MESSAGE_TYPE: i32 = 0;

/// Conventional message_type carried by operation requests and responses.
pub const OPERATION_MESSAGE_TYPE: i32 = 1;

/// Greeting text the client sends to open a session.
pub const CLIENT_GREETING: &str = "hello";

/// Greeting text the server answers with. Matched case-insensitively.
pub const SERVER_GREETING: &str = "helo world";

// ── Message shapes ────────────────────────────────────────────────────────────

/// Heartbeat frame payload, used by both directions of the handshake.
///
/// On the wire the text occupies a fixed 16-byte field: UTF-8, truncated to
/// at most 16 encoded bytes, right-padded with zero bytes. Decoding strips
/// the trailing zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heartbeat {
    pub message_type: i32,
    pub text: String,
}

/// Operation request frame payload: one arithmetic calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRequest {
    pub message_type: i32,
    /// Selector of the arithmetic operation; 1–4 are meaningful.
    pub op_code: u8,
    pub operand1: i32,
    pub operand2: i32,
}

/// Operation response frame payload.
///
/// The result field is 8 bytes, wider than the 4-byte operands, so the
/// product of two extreme 32-bit operands always fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationResponse {
    pub message_type: i32,
    pub result: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_sizes_match_field_layout() {
        assert_eq!(HEADER_SIZE, 5);
        assert_eq!(HEARTBEAT_FRAME_SIZE, 21);
        assert_eq!(OP_REQUEST_FRAME_SIZE, 14);
        assert_eq!(OP_RESPONSE_FRAME_SIZE, 17);
    }

    #[test]
    fn test_magic_bytes_are_ascii_calc() {
        assert_eq!(&MAGIC_BYTES, b"CALC");
    }
}
