//! kohub - Knowledge Object proposals as pull requests
//!
//! CLI binary for proposing KOs and browsing the registries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

/// Default location of the repository registry
const DEFAULT_REPOS_SOURCE: &str = "registry/repos.json";

/// Default location of the KO registry
const DEFAULT_KO_REGISTRY_SOURCE: &str = "data/ko-registry.json";

/// Default location of the narrative manifest
const DEFAULT_MANIFEST_SOURCE: &str = "chronicle/house_of_tyme_manifest.json";

#[derive(Parser)]
#[command(name = "kohub")]
#[command(about = "Propose Knowledge Objects as GitHub pull requests")]
#[command(version)]
struct Cli {
    /// Verbose logging (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Propose a new KO as a pull request
    Submit {
        /// Target repository (owner/name or a GitHub URL)
        #[arg(long)]
        repo: String,

        /// Branch the PR merges into
        #[arg(long, default_value = "main")]
        base: String,

        /// Access token (falls back to gh CLI, then GITHUB_TOKEN / GH_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// KO title
        #[arg(long, default_value = "")]
        title: String,

        /// KO kind
        #[arg(long, default_value = "dataset")]
        kind: String,

        /// Comma-separated authors
        #[arg(long, default_value = "")]
        authors: String,

        /// License (defaults to CC-BY-SA-4.0)
        #[arg(long, default_value = "")]
        license: String,

        /// Comma-separated sources
        #[arg(long, default_value = "")]
        sources: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// GitHub REST API root (defaults to api.github.com or GH_HOST)
        #[arg(long)]
        api_url: Option<String>,

        /// Dry run - show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the repository registry
    Repos {
        /// Registry file or URL
        #[arg(long, default_value = DEFAULT_REPOS_SOURCE)]
        source: String,
    },

    /// Search the KO registry
    Search {
        /// Case-insensitive substring to match
        query: Option<String>,

        /// Registry file or URL
        #[arg(long, default_value = DEFAULT_KO_REGISTRY_SOURCE)]
        source: String,
    },

    /// Render the narrative manifest
    Manifest {
        /// Manifest file or URL
        #[arg(long, default_value = DEFAULT_MANIFEST_SOURCE)]
        source: String,
    },

    /// Build the KO registry from trees of KO documents
    Aggregate {
        /// Directories to scan for `**/ko/**/*.json`
        #[arg(long, required = true, num_args = 1..)]
        roots: Vec<PathBuf>,

        /// Where to write the merged registry
        #[arg(long, default_value = DEFAULT_KO_REGISTRY_SOURCE)]
        out: PathBuf,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test {
        /// GitHub REST API root
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Show authentication setup instructions
    Setup,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "ko_hub=info,kohub=info",
        _ => "ko_hub=debug,kohub=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ok = match cli.command {
        Commands::Submit {
            repo,
            base,
            token,
            title,
            kind,
            authors,
            license,
            sources,
            tags,
            api_url,
            dry_run,
            yes,
        } => {
            let options = cli::SubmitOptions {
                repo,
                base,
                token,
                title,
                kind,
                authors,
                license,
                sources,
                tags,
                api_url,
                dry_run,
                assume_yes: yes,
            };
            cli::run_submit(options).await?
        }
        Commands::Repos { source } => {
            cli::run_repos(&source).await?;
            true
        }
        Commands::Search { query, source } => {
            cli::run_search(&source, query.as_deref().unwrap_or_default()).await?;
            true
        }
        Commands::Manifest { source } => {
            cli::run_manifest(&source).await?;
            true
        }
        Commands::Aggregate { roots, out } => {
            cli::run_aggregate(&roots, &out)?;
            true
        }
        Commands::Auth { action } => {
            match action {
                AuthAction::Test { api_url } => cli::run_auth_test(api_url.as_deref()).await?,
                AuthAction::Setup => cli::run_auth_setup(),
            }
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
