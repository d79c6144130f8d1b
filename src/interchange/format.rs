//! Common trait for sample export formats.

use super::InterchangeError;
use super::node_link::NodeLinkGraph;
use crate::graph::GraphExtraction;
use crate::representation::AstGraph;
use crate::seq::SeqExtraction;

/// A text format extraction samples can be written in.
///
/// Graph extractions are written as their node arena plus the ids of the
/// top-level functions and records; AST graphs as a node-link document
/// (`nodes` and `links`, edges carrying their kind).
pub trait SampleFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    fn write_graph(&self, extraction: &GraphExtraction) -> Result<Vec<u8>, InterchangeError>;

    fn write_seq(&self, extraction: &SeqExtraction) -> Result<Vec<u8>, InterchangeError>;

    fn write_ast_graph(&self, graph: &AstGraph) -> Result<Vec<u8>, InterchangeError>;
}

/// JSON, pretty-printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Json {
    fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, InterchangeError> {
        serde_json::to_vec_pretty(value).map_err(|e| InterchangeError::json(e.to_string()))
    }
}

impl SampleFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn write_graph(&self, extraction: &GraphExtraction) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(extraction)
    }

    fn write_seq(&self, extraction: &SeqExtraction) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(extraction)
    }

    fn write_ast_graph(&self, graph: &AstGraph) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(&NodeLinkGraph::new(graph))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Yaml {
    fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, InterchangeError> {
        serde_yaml::to_string(value)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(e.to_string()))
    }
}

impl SampleFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn write_graph(&self, extraction: &GraphExtraction) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(extraction)
    }

    fn write_seq(&self, extraction: &SeqExtraction) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(extraction)
    }

    fn write_ast_graph(&self, graph: &AstGraph) -> Result<Vec<u8>, InterchangeError> {
        Self::encode(&NodeLinkGraph::new(graph))
    }
}
