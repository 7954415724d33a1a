//! Logging utilities.
//!
//! The kernel logs through the `log` facade only; this module wires up
//! `env_logger` for hosts that want a ready-made backend.

mod init;

pub use init::{init_logging, LoggingConfig};
