//! Repository slug parsing

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::sync::LazyLock;

static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@([^:]+):(.+?)(?:\.git)?/?$").expect("hardcoded regex is valid")
});

static RE_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("hardcoded regex is valid")
});

/// Parse the target repository from user input
///
/// Accepts `owner/name`, `https://host/owner/name(.git)` and
/// `git@host:owner/name(.git)`. A host other than github.com is kept so the
/// API base can point at GitHub Enterprise.
pub fn parse_repo_slug(input: &str) -> Result<PlatformConfig> {
    let input = input.trim();
    let invalid = || Error::Validation(format!("invalid repository {input:?}: expected owner/name"));

    let (host, path) = if let Some(caps) = RE_SSH.captures(input) {
        (Some(caps[1].to_string()), caps[2].to_string())
    } else if input.starts_with("http://") || input.starts_with("https://") {
        let url = url::Url::parse(input).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?.to_string();
        let path = url.path().trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path).to_string();
        (Some(host), path)
    } else {
        (None, input.to_string())
    };

    let caps = RE_SLUG.captures(&path).ok_or_else(invalid)?;
    let host = host.filter(|h| h != "github.com" && h != "www.github.com");

    Ok(PlatformConfig {
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        host,
    })
}
