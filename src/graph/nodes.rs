//! Node types of the graph representation.
//!
//! Cross references between nodes are [`NodeId`]s into the extraction's
//! arena, so cyclic structures (a record pointing to itself, loop edges
//! between blocks) need no shared ownership.

use smol_str::SmolStr;

use super::NodeId;
use crate::base::Token;

/// A named declaration: variable, parameter, field, function or typedef.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DeclNode {
    pub name: SmolStr,
    /// Printed declared type; for typedefs, the class of the aliased type.
    pub ty: String,
    /// Declaration kind name (`Var`, `ParmVar`, `Field`, ...).
    pub kind: &'static str,
    pub tokens: Vec<Token>,
    pub name_token: Option<Token>,
    /// Record reached by unwrapping the declared type's pointers.
    pub record_type: Option<NodeId>,
    /// Alias the declared type is spelled with.
    pub referenced_typedef: Option<NodeId>,
}

/// A statement or expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct StmtNode {
    /// Statement class name.
    pub name: SmolStr,
    pub tokens: Vec<Token>,
    /// Child statements, then declarations of a declaration statement.
    pub ast_relations: Vec<NodeId>,
    /// Declarations this statement reads.
    pub ref_relations: Vec<NodeId>,
}

/// A struct or union, defined or forward-declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RecordNode {
    pub name: SmolStr,
    /// Whether the record is named through a typedef.
    pub is_typedef: bool,
    pub tokens: Vec<Token>,
    pub referenced_records: Vec<NodeId>,
    pub referenced_enums: Vec<NodeId>,
    pub referenced_typedefs: Vec<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct EnumNode {
    pub name: SmolStr,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct TypedefNode {
    pub name: SmolStr,
    /// Spelling of the aliased type.
    pub underlying: String,
    pub tokens: Vec<Token>,
    pub name_token: Option<Token>,
}

/// One basic block of a function's control-flow graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct BlockNode {
    /// `cfg_<block number>`.
    pub name: String,
    pub statements: Vec<NodeId>,
    pub successors: Vec<NodeId>,
}

/// A defined function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct FunctionNode {
    pub name: SmolStr,
    /// Printed function type (`int (int, int)`).
    pub ty: String,
    pub tokens: Vec<Token>,
    pub args: Vec<NodeId>,
    /// The body statement.
    pub entry_stmt: NodeId,
    pub cfg_blocks: Vec<NodeId>,
}

/// The closed set of node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(tag = "node", rename_all = "snake_case"))]
pub enum Node {
    Decl(DeclNode),
    Stmt(StmtNode),
    Record(RecordNode),
    Enum(EnumNode),
    Typedef(TypedefNode),
    Block(BlockNode),
    Function(FunctionNode),
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Decl(_) => "decl",
            Node::Stmt(_) => "stmt",
            Node::Record(_) => "record",
            Node::Enum(_) => "enum",
            Node::Typedef(_) => "typedef",
            Node::Block(_) => "block",
            Node::Function(_) => "function",
        }
    }

    /// Tokens owned by this node. Blocks own none.
    pub fn tokens(&self) -> &[Token] {
        match self {
            Node::Decl(n) => &n.tokens,
            Node::Stmt(n) => &n.tokens,
            Node::Record(n) => &n.tokens,
            Node::Enum(n) => &n.tokens,
            Node::Typedef(n) => &n.tokens,
            Node::Block(_) => &[],
            Node::Function(n) => &n.tokens,
        }
    }
}
