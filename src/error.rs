//! Error types for ko-hub

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic detail captured from a failed hosting API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    /// HTTP status, when the remote answered at all
    pub status: Option<u16>,
    /// Raw response text (or transport error text)
    pub detail: String,
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{status} {}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

/// The four remote steps of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Read the base branch head
    ResolveBase,
    /// Create the proposal branch
    CreateBranch,
    /// Commit the proposal file
    CommitFile,
    /// Open the pull request
    OpenPullRequest,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolveBase => "resolve base branch",
            Self::CreateBranch => "create branch",
            Self::CommitFile => "commit file",
            Self::OpenPullRequest => "open pull request",
        };
        f.write_str(name)
    }
}

/// Errors produced by ko-hub
#[derive(Debug, Error)]
pub enum Error {
    /// Required input missing or malformed; raised before any network call
    #[error("{0}")]
    Validation(String),

    /// Step 1 failed: the base branch ref could not be read
    #[error("Cannot read base branch: {0}")]
    BaseBranchUnreadable(RemoteFailure),

    /// Step 2 failed: the proposal branch could not be created
    #[error("Branch create failed: {0}")]
    BranchCreateFailed(RemoteFailure),

    /// Step 3 failed: the proposal file could not be committed
    #[error("File commit failed: {0}")]
    FileCommitFailed(RemoteFailure),

    /// Step 4 failed: the pull request could not be opened
    #[error("PR creation failed: {0}")]
    PullRequestFailed(RemoteFailure),

    /// Non-success status from the hosting API
    #[error("GitHub API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Attribute a hosting call failure to the submission step that made it
    ///
    /// Errors that are already step failures or validation errors pass
    /// through unchanged.
    #[must_use]
    pub fn at_step(self, step: Step) -> Self {
        let failure = match self {
            Self::Api { status, body } => RemoteFailure {
                status: Some(status),
                detail: body,
            },
            Self::Validation(_)
            | Self::BaseBranchUnreadable(_)
            | Self::BranchCreateFailed(_)
            | Self::FileCommitFailed(_)
            | Self::PullRequestFailed(_) => return self,
            other => RemoteFailure {
                status: None,
                detail: other.to_string(),
            },
        };

        match step {
            Step::ResolveBase => Self::BaseBranchUnreadable(failure),
            Step::CreateBranch => Self::BranchCreateFailed(failure),
            Step::CommitFile => Self::FileCommitFailed(failure),
            Step::OpenPullRequest => Self::PullRequestFailed(failure),
        }
    }

    /// The submission step this error belongs to, if any
    pub const fn step(&self) -> Option<Step> {
        match self {
            Self::BaseBranchUnreadable(_) => Some(Step::ResolveBase),
            Self::BranchCreateFailed(_) => Some(Step::CreateBranch),
            Self::FileCommitFailed(_) => Some(Step::CommitFile),
            Self::PullRequestFailed(_) => Some(Step::OpenPullRequest),
            _ => None,
        }
    }
}
