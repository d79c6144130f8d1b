//! Sample export formats (feature `interchange`).
//!
//! Extraction outputs derive `serde::Serialize` when the feature is on.
//! This module writes them to disk-friendly text formats:
//!
//! - **JSON** - pretty-printed, `.json`
//! - **YAML** - `.yaml` / `.yml`
//!
//! ```text
//! GraphExtraction ─┐
//! SeqExtraction  ──┼──▶ SampleFormat::write_* ──▶ Vec<u8>
//! AstGraph ────────┘        (Json, Yaml)
//!   (as NodeLinkGraph)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use compy::interchange::{Json, SampleFormat};
//!
//! let extraction = extractor.graph_from_string(source)?;
//! std::fs::write("sample.json", Json.write_graph(&extraction)?)?;
//! ```

mod error;
mod format;
mod node_link;

pub use error::InterchangeError;
pub use format::{Json, SampleFormat, Yaml};
pub use node_link::{NodeLink, NodeLinkGraph, NodeLinkNode};

/// Supported file extensions for export formats.
pub fn supported_extensions() -> &'static [&'static str] {
    &["json", "yaml", "yml"]
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn SampleFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(Json)),
        "yaml" | "yml" => Some(Box::new(Yaml)),
        _ => None,
    }
}

/// Write a graph extraction to `path` in the format its extension names.
pub fn export_graph(
    extraction: &crate::graph::GraphExtraction,
    path: &std::path::Path,
) -> Result<(), InterchangeError> {
    let format = detect_format(path)
        .ok_or_else(|| InterchangeError::Unsupported(path.display().to_string()))?;
    std::fs::write(path, format.write_graph(extraction)?)?;
    Ok(())
}
