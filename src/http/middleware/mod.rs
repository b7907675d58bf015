//! Request-handling stages wrapped around the handlers.
//!
//! ```text
//! request → request_log (timer start)
//!         → project_id (only on /projects/{id})
//!         → handler
//!         → request_log (timer end, after the response exists)
//! ```

pub mod project_id;
pub mod request_log;

pub use project_id::validate_project_id;
pub use request_log::{log_requests, record_metrics};
