//! Logger setup for the command-line front end.
//!
//! The library crates only talk to the `log` facade; this is the single
//! place a backend gets installed.

mod init;

pub use init::{LoggingConfig, init_logging};
