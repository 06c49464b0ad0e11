//! ko-hub - Knowledge Object proposals as pull requests
//!
//! Builds a Knowledge Object (KO) proposal record from user input and lands
//! it on a GitHub repository as a new branch, a committed JSON file and a
//! pull request. Also builds, loads and renders the static registries that sit
//! next to the proposals (repository cards, KO registry search and the
//! narrative manifest).

pub mod auth;
pub mod error;
pub mod platform;
pub mod proposal;
pub mod registry;
pub mod submit;
pub mod types;
