//! # calc-core
//!
//! Shared library for RemoteCalc containing the binary wire codec, the
//! exact-count frame transport helpers, and the arithmetic evaluator.
//!
//! This crate is used by both the server and client applications. It has no
//! dependency on sockets: the codec is pure byte manipulation, and the
//! transport helpers operate on any async byte stream.
//!
//! - **`protocol`** – How bytes travel over the wire. Every frame is a fixed
//!   5-byte metadata header followed by one of three fixed-width payloads
//!   (heartbeat, operation request, operation response). Nothing is
//!   length-prefixed; both peers always know which frame comes next.
//!
//! - **`domain`** – Pure business logic with no I/O. The arithmetic
//!   evaluator maps an operation selector and two 32-bit operands to a
//!   64-bit result.

pub mod domain;
pub mod protocol;

pub use domain::eval::{evaluate, OpCode};
pub use protocol::codec::{
    decode_header, decode_heartbeat, decode_operation_request, decode_operation_response,
    encode_header, encode_heartbeat, encode_operation_request, encode_operation_response,
    ProtocolError,
};
pub use protocol::messages::{Heartbeat, OperationRequest, OperationResponse};
pub use protocol::transport::{read_frame, write_frame};
