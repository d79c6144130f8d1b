//! Control-flow graphs as built by the frontend for one function body.

use thiserror::Error;

use super::StmtId;

/// Errors raised while building or validating a control-flow graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CfgError {
    /// The frontend cannot build a graph for this body.
    #[error("control-flow graph unsupported: {0}")]
    Unsupported(String),

    /// The graph refers to blocks it does not contain.
    #[error("malformed control-flow graph: {0}")]
    Malformed(String),
}

/// One basic block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CfgBlock {
    /// Frontend block number, used for the block label.
    pub id: u32,
    /// Statements in execution order.
    pub elements: Vec<StmtId>,
    pub terminator: Option<StmtId>,
    /// Indices into [`Cfg::blocks`]; `None` marks a pruned edge.
    pub successors: Vec<Option<usize>>,
}

impl CfgBlock {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_elements(mut self, elements: impl IntoIterator<Item = StmtId>) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn with_terminator(mut self, terminator: StmtId) -> Self {
        self.terminator = Some(terminator);
        self
    }

    pub fn with_successors(mut self, successors: impl IntoIterator<Item = usize>) -> Self {
        self.successors.extend(successors.into_iter().map(Some));
        self
    }
}

/// A function body's control-flow graph. Successor edges may form cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cfg {
    pub blocks: Vec<CfgBlock>,
}

impl Cfg {
    pub fn new(blocks: Vec<CfgBlock>) -> Self {
        Self { blocks }
    }

    /// Check that every successor edge lands on a block of this graph.
    pub fn validate(&self) -> Result<(), CfgError> {
        for block in &self.blocks {
            for succ in block.successors.iter().flatten() {
                if *succ >= self.blocks.len() {
                    return Err(CfgError::Malformed(format!(
                        "block {} has successor {} of {}",
                        block.id,
                        succ,
                        self.blocks.len()
                    )));
                }
            }
        }
        Ok(())
    }
}
