//! Repository registry cards

use crate::registry::DataSource;
use crate::types::RepoEntry;
use std::io::{self, Write};
use tracing::warn;

/// Public gateway used to link IPFS content identifiers
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Load the repository registry, or an empty list if it can't be read
pub async fn load_repos(source: &DataSource) -> Vec<RepoEntry> {
    match source.load().await {
        Ok(repos) => repos,
        Err(e) => {
            warn!("Repository registry unavailable ({source}): {e}");
            Vec::new()
        }
    }
}

/// Render one card per repository: name, description (if any), then its links
pub fn render_repo_cards(out: &mut impl Write, repos: &[RepoEntry]) -> io::Result<()> {
    for (idx, repo) in repos.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", repo.name)?;
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "  {description}")?;
        }

        let links = repo_links(repo);
        if !links.is_empty() {
            let rendered: Vec<String> = links
                .iter()
                .map(|(label, url)| format!("{label}: {url}"))
                .collect();
            writeln!(out, "  {}", rendered.join(" · "))?;
        }
    }
    Ok(())
}

fn repo_links(repo: &RepoEntry) -> Vec<(&'static str, String)> {
    let present = |link: &Option<String>| link.clone().filter(|s| !s.is_empty());
    [
        ("GitHub", present(&repo.github)),
        ("Hugging Face", present(&repo.huggingface)),
        ("Replit", present(&repo.replit)),
        ("IPFS", present(&repo.ipfs_cid).map(|cid| format!("{IPFS_GATEWAY}{cid}"))),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .collect()
}
