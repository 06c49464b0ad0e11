//! Hosting platform services
//!
//! The four GitHub REST calls a proposal submission needs, behind a trait so
//! the submission pipeline can run against a test double.

mod detection;
mod factory;
mod github;

pub use detection::parse_repo_slug;
pub use factory::{api_base_url, create_platform_service};
pub use github::{encode_content, GitHubService, GITHUB_ACCEPT};

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Platform service trait for the proposal workflow
///
/// Each method is one HTTP round trip. Non-success responses come back as
/// [`Error::Api`](crate::error::Error::Api) carrying the raw response text.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Read the commit SHA a branch points at
    async fn get_branch_sha(&self, branch: &str) -> Result<String>;

    /// Create `refs/heads/<branch>` pointing at `sha`
    async fn create_branch(&self, branch: &str, sha: &str) -> Result<()>;

    /// Create a file on a branch with the given UTF-8 content
    async fn create_file(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &str,
    ) -> Result<()>;

    /// Open a pull request
    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
