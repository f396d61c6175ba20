//! Club platform API gateway library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{BackendClient, BackendResult};
