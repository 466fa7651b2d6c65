//! Logging setup.
//!
//! Library code only talks to the `log` facade. Binaries and tests call
//! [`init_logging`] to install an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_LEVEL};
