//! Submission execution
//!
//! Runs the four remote steps strictly in order. Each step consumes the
//! previous step's output, and the first failure stops the run. Nothing is
//! rolled back: a failure after step 2 leaves the branch (and possibly the
//! file) on the remote.

use crate::error::{Error, Result, Step};
use crate::platform::PlatformService;
use crate::submit::plan::PR_BODY;
use crate::submit::{Phase, ProgressCallback, SubmissionPlan};
use crate::types::{ProposalRecord, PullRequest};
use tracing::{debug, info};

/// Result of submission execution
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// The opened PR (None on a dry run)
    pub pull_request: Option<PullRequest>,
    /// The record that was (or would be) committed
    pub record: ProposalRecord,
}

/// Head of the base branch (output of step 1)
struct BaseHead {
    sha: String,
}

/// Proposal branch on the remote (output of step 2)
struct CreatedBranch<'a> {
    name: &'a str,
}

/// Proposal file committed on the branch (output of step 3)
struct CommittedFile<'a> {
    branch: &'a str,
}

/// Execute a submission plan
///
/// This performs the actual operations:
/// 1. Read the base branch head
/// 2. Create the proposal branch at that commit
/// 3. Commit the proposal file to the branch
/// 4. Open the pull request
pub async fn execute_submission(
    plan: &SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<SubmissionResult> {
    let mut result = SubmissionResult {
        pull_request: None,
        record: plan.record.clone(),
    };

    if dry_run {
        progress.on_message("Dry run - no changes will be made").await;
        report_dry_run(plan, progress).await;
        return Ok(result);
    }

    let target = platform.config();
    if !target.owner.eq_ignore_ascii_case(&plan.target.owner)
        || !target.repo.eq_ignore_ascii_case(&plan.target.repo)
    {
        return Err(Error::Validation(format!(
            "service targets {} but the proposal targets {}",
            target.slug(),
            plan.target.slug()
        )));
    }

    info!(
        "Submitting {} to {} (base {})",
        plan.ids.id,
        plan.target.slug(),
        plan.base_branch
    );

    let pr = match run_steps(plan, platform, progress).await {
        Ok(pr) => pr,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    progress.on_phase(Phase::Complete).await;
    result.pull_request = Some(pr);
    Ok(result)
}

async fn run_steps(
    plan: &SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<PullRequest> {
    let base = resolve_base(plan, platform, progress).await?;
    let branch = create_branch(plan, platform, progress, base).await?;
    let file = commit_file(plan, platform, progress, branch).await?;
    open_pull_request(plan, platform, progress, file).await
}

async fn resolve_base(
    plan: &SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<BaseHead> {
    progress.on_phase(Phase::ResolvingBase).await;

    let sha = platform
        .get_branch_sha(&plan.base_branch)
        .await
        .map_err(|e| e.at_step(Step::ResolveBase))?;

    debug!("Base {} resolved to {sha}", plan.base_branch);
    Ok(BaseHead { sha })
}

async fn create_branch<'a>(
    plan: &'a SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    base: BaseHead,
) -> Result<CreatedBranch<'a>> {
    progress.on_phase(Phase::CreatingBranch).await;

    let name = plan.ids.branch.as_str();
    platform
        .create_branch(name, &base.sha)
        .await
        .map_err(|e| e.at_step(Step::CreateBranch))?;

    progress.on_branch_created(name, &base.sha).await;
    Ok(CreatedBranch { name })
}

async fn commit_file<'a>(
    plan: &SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    branch: CreatedBranch<'a>,
) -> Result<CommittedFile<'a>> {
    progress.on_phase(Phase::CommittingFile).await;

    platform
        .create_file(&plan.ids.path, branch.name, &plan.commit_message, &plan.body)
        .await
        .map_err(|e| e.at_step(Step::CommitFile))?;

    progress.on_file_committed(&plan.ids.path).await;
    Ok(CommittedFile {
        branch: branch.name,
    })
}

async fn open_pull_request(
    plan: &SubmissionPlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    file: CommittedFile<'_>,
) -> Result<PullRequest> {
    progress.on_phase(Phase::OpeningPullRequest).await;

    let pr = platform
        .create_pr(file.branch, &plan.base_branch, &plan.pr_title, PR_BODY)
        .await
        .map_err(|e| e.at_step(Step::OpenPullRequest))?;

    info!("Opened PR #{} at {}", pr.number, pr.html_url);
    progress.on_pr_created(&pr).await;
    Ok(pr)
}

/// Report what would be done in a dry run
async fn report_dry_run(plan: &SubmissionPlan, progress: &dyn ProgressCallback) {
    progress
        .on_message(&format!(
            "Would create branch {} from {} on {}",
            plan.ids.branch,
            plan.base_branch,
            plan.target.slug()
        ))
        .await;
    progress
        .on_message(&format!("Would commit {}", plan.ids.path))
        .await;
    progress
        .on_message(&format!("Would open PR: {}", plan.pr_title))
        .await;
    progress.on_message(&plan.body).await;
}
