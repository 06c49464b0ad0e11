//! Submit command - propose a KO as a pull request

use crate::cli::progress::CliProgress;
use crate::cli::style::{arrow, Stylize};
use anstream::{eprintln, println};
use chrono::Utc;
use dialoguer::Confirm;
use ko_hub::auth::get_github_auth;
use ko_hub::error::{Result, Step};
use ko_hub::platform::create_platform_service;
use ko_hub::proposal::ProposalDraft;
use ko_hub::submit::{
    execute_submission, plan_submission, SubmissionOutcome, SubmissionPlan, SubmissionRequest,
};
use std::io::IsTerminal;
use tracing::debug;

/// Everything `kohub submit` was invoked with
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub repo: String,
    pub base: String,
    pub token: Option<String>,
    pub title: String,
    pub kind: String,
    pub authors: String,
    pub license: String,
    pub sources: String,
    pub tags: String,
    pub api_url: Option<String>,
    pub dry_run: bool,
    pub assume_yes: bool,
}

/// Run the submit command
///
/// Returns whether the pull request was opened (or the dry run planned).
pub async fn run_submit(options: SubmitOptions) -> Result<bool> {
    // A missing token is reported by validation, alongside repo and title
    let access_token = match get_github_auth(options.token.as_deref()).await {
        Ok(auth) => {
            debug!("Using token from {:?}", auth.source);
            auth.token
        }
        Err(e) => {
            debug!("{e}");
            String::new()
        }
    };

    let request = SubmissionRequest {
        repo: options.repo,
        base_branch: options.base,
        access_token,
        draft: ProposalDraft {
            title: options.title,
            kind: options.kind,
            license: options.license,
            authors_csv: options.authors,
            sources_csv: options.sources,
            tags_csv: options.tags,
        },
    };

    let plan = match plan_submission(&request, Utc::now()) {
        Ok(plan) => plan,
        Err(e) => {
            report(&SubmissionOutcome::Failed { error: e }, None);
            return Ok(false);
        }
    };

    print_summary(&plan);

    if !options.dry_run && !options.assume_yes && std::io::stdin().is_terminal() {
        let proceed = Confirm::new()
            .with_prompt(format!("Open a pull request on {}?", plan.target.slug()))
            .default(true)
            .interact()
            .unwrap_or(false);
        if !proceed {
            println!("{}", "Aborted".muted());
            return Ok(false);
        }
    }

    let platform = match create_platform_service(
        &plan.target,
        &request.access_token,
        options.api_url.as_deref(),
    ) {
        Ok(platform) => platform,
        Err(error) => {
            report(&SubmissionOutcome::Failed { error }, None);
            return Ok(false);
        }
    };
    let progress = CliProgress::new();

    let result = execute_submission(&plan, platform.as_ref(), &progress, options.dry_run).await;
    if options.dry_run {
        return result.map(|_| true);
    }

    let outcome = SubmissionOutcome::from_result(result);
    report(&outcome, Some(&plan));
    Ok(outcome.is_created())
}

fn print_summary(plan: &SubmissionPlan) {
    println!(
        "Proposing {} to {}",
        plan.record.title.emphasis(),
        plan.target.slug().accent()
    );
    println!(
        "  {} branch {} from {}",
        arrow(),
        plan.ids.branch.accent(),
        plan.base_branch.accent()
    );
    println!("  {} file {}", arrow(), plan.ids.path.accent());
    println!();
}

fn report(outcome: &SubmissionOutcome, plan: Option<&SubmissionPlan>) {
    match outcome {
        SubmissionOutcome::Created { .. } => {
            println!();
            println!("{}", outcome.message().success());
        }
        SubmissionOutcome::Failed { error } => {
            eprintln!("{}", outcome.message().error());

            let partially_applied = matches!(
                error.step(),
                Some(Step::CommitFile | Step::OpenPullRequest)
            );
            if let (true, Some(plan)) = (partially_applied, plan) {
                eprintln!(
                    "{}",
                    format!(
                        "Branch {} may already exist on {}; inspect it before retrying.",
                        plan.ids.branch,
                        plan.target.slug()
                    )
                    .warn()
                );
            }
        }
    }
}
