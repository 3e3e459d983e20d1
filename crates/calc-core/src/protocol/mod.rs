//! Wire protocol: message shapes, the binary codec, and frame transport helpers.

pub mod codec;
pub mod messages;
pub mod transport;

pub use codec::{
    decode_header, decode_heartbeat, decode_operation_request, decode_operation_response,
    encode_header, encode_heartbeat, encode_operation_request, encode_operation_response,
    ProtocolError,
};
pub use messages::*;
pub use transport::{read_frame, write_frame};
