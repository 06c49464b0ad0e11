//! CLI commands
//!
//! Command implementations for the `kohub` binary.

mod aggregate;
mod auth;
mod manifest;
mod progress;
mod repos;
mod search;
mod style;
mod submit;

pub use aggregate::run_aggregate;
pub use auth::{run_auth_setup, run_auth_test};
pub use manifest::run_manifest;
pub use repos::run_repos;
pub use search::run_search;
pub use submit::{run_submit, SubmitOptions};
