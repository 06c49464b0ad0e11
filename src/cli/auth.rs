//! Auth command - test and explain authentication

use anstream::println;
use crate::cli::style::{check, Stylize};
use ko_hub::auth::{get_github_auth, test_github_auth};
use ko_hub::error::Result;
use ko_hub::platform::api_base_url;
use ko_hub::types::PlatformConfig;

/// Run the auth test command
pub async fn run_auth_test(api_url: Option<&str>) -> Result<()> {
    println!("Testing GitHub authentication...");
    let config = get_github_auth(None).await?;

    // Only the host matters for the API root
    let anywhere = PlatformConfig {
        owner: String::new(),
        repo: String::new(),
        host: None,
    };
    let base = api_base_url(&anywhere, api_url);

    let username = test_github_auth(&config, &base).await?;
    println!("{} Authenticated as: {}", check(), username.accent());
    println!("Token source: {:?}", config.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitHub Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: pass --token to `kohub submit`");
    println!();
    println!("Option 2: GitHub CLI");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
    println!();
    println!("Option 3: Environment variable");
    println!("  Set GITHUB_TOKEN or GH_TOKEN");
    println!();
    println!("The token needs contents and pull request write access to the target repository.");
    println!("For GitHub Enterprise, set GH_HOST to your instance hostname.");
}
