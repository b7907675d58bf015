//! Typed client for the projects API.

pub mod client;

pub use client::{ClientError, Project, ProjectsClient};
