//! KO registry search

use crate::registry::DataSource;
use serde_json::Value;
use std::io::{self, Write};
use tracing::warn;

/// Load the KO registry; `None` when it is missing or not a JSON array
pub async fn load_ko_registry(source: &DataSource) -> Option<Vec<Value>> {
    match source.load::<Vec<Value>>().await {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!("KO registry unavailable ({source}): {e}");
            None
        }
    }
}

/// Entries whose lowercased JSON serialization contains the lowercased query
///
/// Matching is a raw substring test over the whole compact entry, keys and
/// punctuation included, with numbers written the way a browser's
/// `JSON.stringify` writes them (`1.0` as `1`, `1e21` as `1e+21`). An empty
/// query keeps everything.
pub fn filter_registry<'a>(entries: &'a [Value], query: &str) -> Vec<&'a Value> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| search_text(entry).to_lowercase().contains(&needle))
        .collect()
}

/// Compact serialization of `value` with JavaScript number formatting
fn search_text(value: &Value) -> String {
    let mut out = String::new();
    write_compact(value, &mut out);
    out
}

fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => {
            let text = n.as_f64().map_or_else(|| n.to_string(), js_number);
            out.push_str(&text);
        }
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_compact(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                out.push_str(&Value::from(key.as_str()).to_string());
                out.push(':');
                write_compact(item, out);
            }
            out.push('}');
        }
        Value::Null | Value::Bool(_) | Value::String(_) => out.push_str(&value.to_string()),
    }
}

/// Shortest round-trip form, exponent outside `[1e-6, 1e21)` with an explicit sign
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return format!("{f}");
    }
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Write the matching entries as a pretty-printed JSON array
pub fn render_registry(out: &mut impl Write, entries: &[&Value]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)
}
