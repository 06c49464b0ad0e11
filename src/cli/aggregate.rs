//! Aggregate command - build the KO registry from source trees

use crate::cli::style::{check, Stylize};
use anstream::println;
use ko_hub::error::Result;
use ko_hub::registry::{aggregate, write_registry};
use std::path::{Path, PathBuf};

/// Run the aggregate command
pub fn run_aggregate(roots: &[PathBuf], out: &Path) -> Result<()> {
    let entries = aggregate(roots);
    write_registry(out, &entries)?;

    println!(
        "{} Wrote {} with {} entries",
        check(),
        out.display().to_string().accent(),
        entries.len()
    );
    Ok(())
}
