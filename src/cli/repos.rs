//! Repos command - list the repository registry

use crate::cli::style::Stylize;
use anstream::println;
use ko_hub::error::Result;
use ko_hub::registry::{load_repos, render_repo_cards, DataSource};

/// Run the repos command
pub async fn run_repos(source: &str) -> Result<()> {
    let source: DataSource = source.parse()?;
    let repos = load_repos(&source).await;

    if repos.is_empty() {
        println!("{}", format!("No repositories listed in {source}").muted());
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    render_repo_cards(&mut out, &repos)?;
    Ok(())
}
