//! Text and JSON rendering of catalog entries.

use std::fmt::Write;

use parakeet_registry::{ModelEntry, Quantization};
use serde::Serialize;

/// Outcome of resolving a requested model name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub requested: String,
    pub model: &'static ModelEntry,
    /// True when the requested name was not in the catalog.
    pub fallback: bool,
}

impl Resolution {
    pub fn new(requested: &str, model: &'static ModelEntry) -> Self {
        Self {
            requested: requested.to_string(),
            model,
            fallback: model.name != requested,
        }
    }
}

#[derive(Serialize)]
struct ListedEntry<'a> {
    #[serde(flatten)]
    entry: &'a ModelEntry,
    default: bool,
}

/// One line per entry, the default marked with `*`.
pub fn list_text<'a>(
    entries: impl IntoIterator<Item = &'a ModelEntry>,
    default: &ModelEntry,
) -> String {
    let entries: Vec<_> = entries.into_iter().collect();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let marker = if entry.name == default.name { '*' } else { ' ' };
            format!(
                "{marker} {:<width$}  {:<4}  {}\n",
                entry.name,
                Quantization::label(entry.quantization),
                entry.description,
            )
        })
        .collect()
}

pub fn list_json<'a>(
    entries: impl IntoIterator<Item = &'a ModelEntry>,
    default: &ModelEntry,
) -> serde_json::Result<String> {
    let listed: Vec<_> = entries
        .into_iter()
        .map(|entry| ListedEntry {
            entry,
            default: entry.name == default.name,
        })
        .collect();
    serde_json::to_string_pretty(&listed)
}

/// Multi-line description of a single entry.
pub fn entry_text(entry: &ModelEntry) -> String {
    format!(
        "name:         {}\nbacking id:   {}\nquantization: {}\ndescription:  {}\n",
        entry.name,
        entry.backing_id,
        Quantization::label(entry.quantization),
        entry.description,
    )
}

pub fn resolution_text(resolution: &Resolution) -> String {
    let mut out = entry_text(resolution.model);
    if resolution.fallback {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "(requested '{}' is not in the catalog, using default)",
            resolution.requested
        );
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
