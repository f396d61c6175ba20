//! Backend proxy adapter.
//!
//! # Data Flow
//! ```text
//! route handler
//!     → request.rs (InboundRequest: authorization, query, request id)
//!     → client.rs  (BackendClient::forward: one outbound call)
//!     → result.rs  (BackendResult: Success | Failure)
//!     → result.rs  (normalize: fallback message, status mirroring)
//!     → Response to client
//! ```
//!
//! # Design Decisions
//! - `forward` never fails; every failure becomes `BackendResult::Failure`
//! - No retries, no caching, no shared mutable state
//! - Upstream status is mirrored; 500 only when there is nothing to mirror

pub mod client;
pub mod error;
pub mod request;
pub mod result;

pub use client::BackendClient;
pub use error::{ClientError, UpstreamError};
pub use request::{ForwardOptions, InboundRequest, UpstreamPath};
pub use result::{normalize, normalize_no_content, BackendResult};
