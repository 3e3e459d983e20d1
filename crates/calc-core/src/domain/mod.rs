//! Pure domain logic shared by the server and client. No I/O.

pub mod eval;
