//! calc-client library entry point.
//!
//! Re-exports the exchange driver so that integration tests and the binary
//! entry point in `main.rs` share the same module tree.

pub mod driver;

pub use driver::{calculate, run_exchange, ClientError};
