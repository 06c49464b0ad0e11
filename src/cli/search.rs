//! Search command - substring search over the KO registry

use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use ko_hub::error::Result;
use ko_hub::registry::{filter_registry, load_ko_registry, render_registry, DataSource};

/// Run the search command
pub async fn run_search(source: &str, query: &str) -> Result<()> {
    let source: DataSource = source.parse()?;

    let Some(entries) = load_ko_registry(&source).await else {
        println!(
            "{}",
            "No KO registry yet. You can still propose a new KO with `kohub submit`.".muted()
        );
        return Ok(());
    };

    let hits = filter_registry(&entries, query);
    eprintln!(
        "{}",
        format!("{} of {} entries match", hits.len(), entries.len())
            .muted()
            .for_stderr()
    );

    let mut out = std::io::stdout().lock();
    render_registry(&mut out, &hits)?;
    Ok(())
}
