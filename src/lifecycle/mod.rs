//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Pick runtime mode → Serve
//!
//! Mode (mode.rs):
//!     AWS_LAMBDA_RUNTIME_API set → Lambda, otherwise local listener
//!
//! Shutdown (shutdown.rs, signals.rs, local mode only):
//!     SIGTERM/SIGINT → broadcast → stop accepting → drain → exit
//! ```

pub mod mode;
pub mod shutdown;
pub mod signals;

pub use mode::RuntimeMode;
pub use shutdown::Shutdown;
