//! KO registry aggregation
//!
//! Walks source trees for KO documents (`**/ko/**/*.json`) and merges them
//! into the flat array that `kohub search` reads.

use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Key recording where an aggregated entry was read from
pub const SOURCE_PATH_KEY: &str = "_source_path";

/// Collect every KO document under `roots`, in root order
///
/// Roots that aren't directories are skipped. Files whose relative path
/// mentions `schema` are skipped. Unreadable or non-object documents are
/// logged and skipped.
pub fn aggregate(roots: &[PathBuf]) -> Vec<Value> {
    let mut merged = Vec::new();
    for root in roots {
        if !root.is_dir() {
            debug!("Skipping {}: not a directory", root.display());
            continue;
        }
        merged.extend(collect(root));
    }
    merged
}

fn collect(root: &Path) -> Vec<Value> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(std::result::Result::ok);

    for entry in walker {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !under_ko_dir(relative) {
            continue;
        }
        let source_path = slash_path(relative);
        if source_path.contains("schema") {
            continue;
        }

        match read_entry(path) {
            Ok(Value::Object(mut map)) => {
                map.insert(SOURCE_PATH_KEY.to_string(), Value::String(source_path));
                entries.push(Value::Object(map));
            }
            Ok(_) => warn!("Skipping {}: not a JSON object", path.display()),
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }

    debug!("Collected {} entries from {}", entries.len(), root.display());
    entries
}

fn read_entry(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Whether any directory between the root and the file is named `ko`
fn under_ko_dir(relative: &Path) -> bool {
    relative
        .parent()
        .is_some_and(|dir| dir.components().any(|c| c == Component::Normal("ko".as_ref())))
}

fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Write `entries` as a 2-space indented JSON array, creating parent directories
pub fn write_registry(out: &Path, entries: &[Value]) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let rendered = serde_json::to_string_pretty(entries)?;
    fs::write(out, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_ko_dir() {
        assert!(under_ko_dir(Path::new("ko/a.json")));
        assert!(under_ko_dir(Path::new("branch/ko/nested/a.json")));
        assert!(!under_ko_dir(Path::new("ko.json")));
        assert!(!under_ko_dir(Path::new("kos/a.json")));
        assert!(!under_ko_dir(Path::new("a/b.json")));
    }

    #[test]
    fn test_slash_path() {
        let path: PathBuf = ["branch", "ko", "a.json"].iter().collect();
        assert_eq!(slash_path(&path), "branch/ko/a.json");
    }
}
