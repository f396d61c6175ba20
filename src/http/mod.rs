//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID stamped and echoed)
//!     → routes (table-driven pass-through handlers)
//!     → error.rs (locally answered failures)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
