//! In-memory projects CRUD service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod projects;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use projects::{Project, ProjectId, ProjectPayload, ProjectStore};
