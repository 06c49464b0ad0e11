//! Submission planning
//!
//! Validates input and derives everything the remote steps need. Pure: no
//! network access, the clock is passed in.

use crate::error::{Error, Result};
use crate::platform::parse_repo_slug;
use crate::proposal::{build_record, ProposalDraft, ProposalIds};
use crate::types::{PlatformConfig, ProposalRecord};
use chrono::{DateTime, Utc};

/// Base branch used when none is given
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Body of every proposal pull request
pub const PR_BODY: &str = "Created via ko-hub";

/// Message shown when a required field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Repo, token, and title are required.";

/// Everything the proposer supplies for one submission
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    /// Target repository, `owner/name`
    pub repo: String,
    /// Base branch; empty means [`DEFAULT_BASE_BRANCH`]
    pub base_branch: String,
    /// Access token presented on every call
    pub access_token: String,
    /// Proposal fields
    pub draft: ProposalDraft,
}

/// Submission plan
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    /// Target repository
    pub target: PlatformConfig,
    /// Branch the PR merges into
    pub base_branch: String,
    /// Derived id, branch and path
    pub ids: ProposalIds,
    /// The record being proposed
    pub record: ProposalRecord,
    /// Pretty-printed record, the committed file body
    pub body: String,
    /// Commit message for the proposal file
    pub commit_message: String,
    /// Pull request title
    pub pr_title: String,
}

/// Create a submission plan
///
/// Fails with [`Error::Validation`] when the repository, token or title is
/// blank, or the repository is not `owner/name`.
pub fn plan_submission(request: &SubmissionRequest, now: DateTime<Utc>) -> Result<SubmissionPlan> {
    let repo = request.repo.trim();
    let title = request.draft.title.trim();

    if repo.is_empty() || request.access_token.trim().is_empty() || title.is_empty() {
        return Err(Error::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let target = parse_repo_slug(repo)?;
    let base_branch = match request.base_branch.trim() {
        "" => DEFAULT_BASE_BRANCH,
        base => base,
    }
    .to_string();

    let record = build_record(&request.draft, now);
    let ids = ProposalIds::for_title(&record.title);
    let body = serde_json::to_string_pretty(&record)?;

    Ok(SubmissionPlan {
        target,
        base_branch,
        commit_message: format!("ko: add {}", ids.id),
        pr_title: format!("Add KO: {}", record.title),
        ids,
        record,
        body,
    })
}
