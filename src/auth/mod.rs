//! Access token resolution for GitHub
//!
//! Supports an explicit token, the gh CLI, and environment variables.

mod github;

pub use github::{get_github_auth, test_github_auth, GitHubAuthConfig};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed explicitly (e.g. `--token`)
    Explicit,
    /// Token from CLI tool (gh)
    Cli,
    /// Token from environment variable
    EnvVar,
}
