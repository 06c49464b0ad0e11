//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, web server, etc.) to receive
//! progress updates while a proposal is submitted.

use crate::error::Error;
use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Validating input and building the record
    Planning,
    /// Reading the base branch head
    ResolvingBase,
    /// Creating the proposal branch
    CreatingBranch,
    /// Committing the proposal file
    CommittingFile,
    /// Opening the pull request
    OpeningPullRequest,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Planning => "Planning",
            Self::ResolvingBase => "Resolving base branch",
            Self::CreatingBranch => "Creating branch",
            Self::CommittingFile => "Committing proposal",
            Self::OpeningPullRequest => "Opening pull request",
            Self::Complete => "Done",
        };
        f.write_str(text)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the proposal branch exists on the remote
    async fn on_branch_created(&self, branch: &str, sha: &str);

    /// Called once the proposal file is committed
    async fn on_file_committed(&self, path: &str);

    /// Called when the PR is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when a step fails; the submission stops afterwards
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_branch_created(&self, _branch: &str, _sha: &str) {}
    async fn on_file_committed(&self, _path: &str) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
