//! Declarations, statements and types of a translation unit.
//!
//! These are the entities a frontend exposes. Cross references between them
//! are ids into the owning [`TranslationUnit`](super::TranslationUnit).

use smol_str::SmolStr;
use text_size::TextSize;

use super::{DeclId, StmtId, TypeId};
use crate::base::SourceRange;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// The name of a declaration as the frontend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclName {
    /// A plain identifier (`foo`, `st2`).
    Identifier(SmolStr),
    /// A name that is not an identifier (operator names, conversion names).
    Special(SmolStr),
    /// An anonymous record, enum or parameter.
    Anonymous,
}

impl DeclName {
    pub fn as_str(&self) -> &str {
        match self {
            DeclName::Identifier(name) | DeclName::Special(name) => name,
            DeclName::Anonymous => "",
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, DeclName::Identifier(_))
    }
}

impl From<&str> for DeclName {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            DeclName::Anonymous
        } else {
            DeclName::Identifier(SmolStr::new(name))
        }
    }
}

/// Struct or union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Struct,
    Union,
}

/// What a declaration declares, with its kind-specific links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Function {
        params: Vec<DeclId>,
        /// `None` for a prototype without a definition.
        body: Option<StmtId>,
    },
    Var,
    ParmVar,
    Field,
    EnumConstant,
    Typedef {
        underlying: TypeId,
    },
    Record {
        tag: TagKind,
        fields: Vec<DeclId>,
        /// The defining declaration of this record, if one is visible.
        /// A definition points at itself.
        definition: Option<DeclId>,
    },
    Enum {
        constants: Vec<DeclId>,
    },
}

impl DeclKind {
    /// Declaration kind name, as printed in extraction output.
    pub fn name(&self) -> &'static str {
        match self {
            DeclKind::Function { .. } => "Function",
            DeclKind::Var => "Var",
            DeclKind::ParmVar => "ParmVar",
            DeclKind::Field => "Field",
            DeclKind::EnumConstant => "EnumConstant",
            DeclKind::Typedef { .. } => "Typedef",
            DeclKind::Record { .. } => "Record",
            DeclKind::Enum { .. } => "Enum",
        }
    }

    /// Declarations that carry a value type of their own.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            DeclKind::Function { .. }
                | DeclKind::Var
                | DeclKind::ParmVar
                | DeclKind::Field
                | DeclKind::EnumConstant
        )
    }
}

/// A declaration in the translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub kind: DeclKind,
    pub name: DeclName,
    /// Location of the declaration's name token.
    pub location: TextSize,
    pub range: SourceRange,
    /// Declared type for value declarations.
    pub ty: Option<TypeId>,
}

impl Decl {
    pub fn new(
        kind: DeclKind,
        name: impl Into<DeclName>,
        location: TextSize,
        range: SourceRange,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            location,
            range,
            ty: None,
        }
    }

    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// A statement or expression in a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// Statement class name (`CompoundStmt`, `ReturnStmt`, `DeclRefExpr`, ...).
    pub class: SmolStr,
    pub range: SourceRange,
    /// Child statements in syntactic order.
    pub children: Vec<StmtId>,
    /// Declared entities, for declaration statements only.
    pub decls: Vec<DeclId>,
    /// The declaration a reference expression reads.
    pub referenced: Option<DeclId>,
}

impl Stmt {
    pub fn new(class: &str, range: SourceRange) -> Self {
        Self {
            class: SmolStr::new(class),
            range,
            children: Vec::new(),
            decls: Vec::new(),
            referenced: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = StmtId>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_decls(mut self, decls: impl IntoIterator<Item = DeclId>) -> Self {
        self.decls.extend(decls);
        self
    }

    pub fn referencing(mut self, decl: DeclId) -> Self {
        self.referenced = Some(decl);
        self
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// Structure of a type. `Typedef`, `Elaborated` and `Paren` are sugar: they
/// name another type without changing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Builtin,
    Pointer(TypeId),
    Array {
        element: TypeId,
        size: Option<u64>,
    },
    Record(DeclId),
    Enum(DeclId),
    Typedef(DeclId),
    Elaborated(TypeId),
    Paren(TypeId),
    FunctionProto {
        ret: TypeId,
        params: Vec<TypeId>,
        variadic: bool,
    },
}

impl TypeKind {
    /// Type class name (`Builtin`, `Pointer`, `Typedef`, ...).
    pub fn class_name(&self) -> &'static str {
        match self {
            TypeKind::Builtin => "Builtin",
            TypeKind::Pointer(_) => "Pointer",
            TypeKind::Array { size: Some(_), .. } => "ConstantArray",
            TypeKind::Array { size: None, .. } => "IncompleteArray",
            TypeKind::Record(_) => "Record",
            TypeKind::Enum(_) => "Enum",
            TypeKind::Typedef(_) => "Typedef",
            TypeKind::Elaborated(_) => "Elaborated",
            TypeKind::Paren(_) => "Paren",
            TypeKind::FunctionProto { .. } => "FunctionProto",
        }
    }
}

/// A type together with its printed spelling (`int *`, `struct st`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    pub spelling: String,
}
