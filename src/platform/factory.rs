//! Platform service factory

use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;
use std::env;

/// Public GitHub REST root
const GITHUB_API: &str = "https://api.github.com";

/// Resolve the REST root for a repository
///
/// Priority: explicit override, the repository's own host, `GH_HOST`,
/// then api.github.com.
pub fn api_base_url(config: &PlatformConfig, override_url: Option<&str>) -> String {
    if let Some(url) = override_url {
        return url.trim_end_matches('/').to_string();
    }

    let host = config
        .host
        .clone()
        .or_else(|| env::var("GH_HOST").ok())
        .filter(|h| !h.is_empty() && h != "github.com");

    host.map_or_else(|| GITHUB_API.to_string(), |h| format!("https://{h}/api/v3"))
}

/// Create a platform service for a repository and access token
pub fn create_platform_service(
    config: &PlatformConfig,
    token: &str,
    api_url: Option<&str>,
) -> Result<Box<dyn PlatformService>> {
    let base = api_base_url(config, api_url);
    Ok(Box::new(GitHubService::new(token, config.clone(), &base)?))
}
