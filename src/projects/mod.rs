//! Project domain.
//!
//! # Data Flow
//! ```text
//! route parameter
//!     → id.rs (canonical UUID check → ProjectId)
//! request body
//!     → model.rs (lenient ProjectPayload)
//!     → store.rs (list / create / update / delete)
//!     → Project (serialized back to the client)
//! ```

pub mod id;
pub mod model;
pub mod store;

pub use id::{is_project_id, InvalidProjectId, ProjectId};
pub use model::{Project, ProjectPayload};
pub use store::{ProjectStore, StoreError};
