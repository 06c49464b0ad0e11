//! Manifest command - render the narrative manifest

use crate::cli::style::Stylize;
use anstream::println;
use ko_hub::error::Result;
use ko_hub::registry::{load_manifest, render_manifest, DataSource};

/// Run the manifest command
pub async fn run_manifest(source: &str) -> Result<()> {
    let source: DataSource = source.parse()?;

    let Some(manifest) = load_manifest(&source).await else {
        println!("{}", format!("No manifest at {source}").muted());
        return Ok(());
    };

    let mut out = std::io::stdout().lock();
    render_manifest(&mut out, &manifest)?;
    Ok(())
}
