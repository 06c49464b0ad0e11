//! Proposal submission engine
//!
//! Handles the workflow of landing a proposal as a pull request:
//! 1. Planning - validate input, build the record, derive identifiers
//! 2. Execution - read base, create branch, commit file, open PR
//!
//! [`submit_proposal`] runs both and folds every failure into a
//! [`SubmissionOutcome`].

mod execute;
mod plan;
mod progress;

pub use execute::{execute_submission, SubmissionResult};
pub use plan::{
    plan_submission, SubmissionPlan, SubmissionRequest, DEFAULT_BASE_BRANCH, PR_BODY,
    REQUIRED_FIELDS_MESSAGE,
};
pub use progress::{NoopProgress, Phase, ProgressCallback};

use crate::error::Error;
use crate::platform::PlatformService;
use crate::types::{ProposalRecord, PullRequest};
use chrono::Utc;

/// Final result of a submission
///
/// A `Failed` outcome may still have left a branch or file on the remote if
/// it failed after step 2; inspect the repository before retrying.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The pull request is open
    Created {
        /// The opened PR
        pull_request: PullRequest,
        /// The record that was committed
        record: ProposalRecord,
    },
    /// The submission stopped at the first failure
    Failed {
        /// What failed
        error: Error,
    },
}

impl SubmissionOutcome {
    /// Fold an execution result into an outcome
    pub fn from_result(result: crate::error::Result<SubmissionResult>) -> Self {
        match result {
            Ok(SubmissionResult {
                pull_request: Some(pull_request),
                record,
            }) => Self::Created {
                pull_request,
                record,
            },
            Ok(SubmissionResult {
                pull_request: None, ..
            }) => Self::Failed {
                error: Error::Internal("submission finished without a pull request".to_string()),
            },
            Err(error) => Self::Failed { error },
        }
    }

    /// Whether the pull request was opened
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// User-facing summary: PR URL plus the record, or the failure
    pub fn message(&self) -> String {
        match self {
            Self::Created {
                pull_request,
                record,
            } => format!(
                "✅ PR created: {}\n\n{}",
                pull_request.html_url,
                serde_json::to_string_pretty(record).unwrap_or_default()
            ),
            Self::Failed { error } => format!("❌ {error}"),
        }
    }
}

/// Plan and execute a submission against `platform`
///
/// Never returns an error: validation and remote failures both come back as
/// [`SubmissionOutcome::Failed`].
pub async fn submit_proposal(
    request: &SubmissionRequest,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> SubmissionOutcome {
    progress.on_phase(Phase::Planning).await;

    let plan = match plan_submission(request, Utc::now()) {
        Ok(plan) => plan,
        Err(error) => {
            progress.on_error(&error).await;
            return SubmissionOutcome::Failed { error };
        }
    };

    SubmissionOutcome::from_result(execute_submission(&plan, platform, progress, false).await)
}
