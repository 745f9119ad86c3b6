//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! API Gateway event (lambda_http) or local TCP connection (axum::serve)
//!     → request.rs (request ID)
//!     → server.rs (router, tracing span, analysis handler)
//!     → response.rs (status, headers, body)
//!     → caller
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{analysis_response, INVALID_BODY_MESSAGE};
pub use server::{AppState, HttpServer};
