//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tower-http layers)
//!     → middleware/request_log.rs (timer)
//!     → middleware/project_id.rs (only routes with {id})
//!     → request.rs (lenient body, query)
//!     → handlers.rs (store access)
//!     → response.rs (JSON bodies, error mapping)
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use response::{ApiError, ErrorBody, Greeting};
pub use server::{build_router, AppState, HttpServer};
