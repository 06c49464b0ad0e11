//! CLI progress callback with a spinner per remote step

use crate::cli::style::{check, cross, hyperlink_url, spinner_style, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use ko_hub::error::Error;
use ko_hub::submit::{Phase, ProgressCallback};
use ko_hub::types::PullRequest;
use std::time::Duration;

/// Prints completed steps and spins while each remote call is pending
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a progress printer with a hidden-until-needed spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Planning => {}
            Phase::Complete => self.spinner.finish_and_clear(),
            _ => {
                self.spinner.enable_steady_tick(Duration::from_millis(80));
                self.spinner.set_message(format!("{phase}..."));
            }
        }
    }

    async fn on_branch_created(&self, branch: &str, sha: &str) {
        self.spinner.suspend(|| {
            println!(
                "  {} Created branch {} {}",
                check(),
                branch.accent(),
                format!("at {}", short_sha(sha)).muted()
            );
        });
    }

    async fn on_file_committed(&self, path: &str) {
        self.spinner.suspend(|| {
            println!("  {} Committed {}", check(), path.accent());
        });
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        self.spinner.suspend(|| {
            println!("  {} Opened PR {}", check(), pr_num.accent());
            println!("    {}", hyperlink_url(Stream::Stdout, &pr.html_url));
        });
    }

    async fn on_error(&self, err: &Error) {
        self.spinner.finish_and_clear();
        if let Some(step) = err.step() {
            eprintln!("  {} Failed to {}", cross(), step.to_string().error());
        }
    }

    async fn on_message(&self, message: &str) {
        self.spinner.suspend(|| println!("{message}"));
    }
}
