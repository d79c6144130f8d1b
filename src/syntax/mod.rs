//! Syntax: the translation unit a frontend hands to the extractor.
//!
//! A [`TranslationUnit`] owns the token stream, the declaration and statement
//! trees, and the type table of one parsed source. Entities are addressed by
//! [`DeclId`], [`StmtId`] and [`TypeId`]; an id is the identity of the
//! underlying source entity for the lifetime of the unit.

mod cfg;
mod tree;

pub use cfg::{Cfg, CfgBlock, CfgError};
pub use tree::{Decl, DeclKind, DeclName, Stmt, TagKind, Type, TypeKind};

use smol_str::SmolStr;
use text_size::TextSize;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

entity_id!(
    /// Identity of a declaration within its translation unit.
    DeclId
);
entity_id!(
    /// Identity of a statement within its translation unit.
    StmtId
);
entity_id!(
    /// Identity of a type within its translation unit.
    TypeId
);

/// A token as produced by the frontend lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: SmolStr,
    pub text: SmolStr,
    pub location: TextSize,
}

impl RawToken {
    pub fn new(kind: &str, text: &str, location: TextSize) -> Self {
        Self {
            kind: SmolStr::new(kind),
            text: SmolStr::new(text),
            location,
        }
    }
}

/// One parsed translation unit.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    tokens: Vec<RawToken>,
    decls: Vec<Decl>,
    stmts: Vec<Stmt>,
    types: Vec<Type>,
    top_level: Vec<DeclId>,
}

impl TranslationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Append a token; tokens must be pushed in stream order.
    pub fn push_token(&mut self, token: RawToken) {
        self.tokens.push(token);
    }

    pub fn add_type(&mut self, kind: TypeKind, spelling: impl Into<String>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(Type {
            kind,
            spelling: spelling.into(),
        });
        id
    }

    pub fn add_builtin(&mut self, name: &str) -> TypeId {
        self.add_type(TypeKind::Builtin, name)
    }

    /// Add a pointer type, spelled the way C prints it (`int *`, `int **`).
    pub fn add_pointer(&mut self, pointee: TypeId) -> TypeId {
        let inner = &self.ty(pointee).spelling;
        let spelling = if inner.ends_with('*') {
            format!("{}*", inner)
        } else {
            format!("{} *", inner)
        };
        self.add_type(TypeKind::Pointer(pointee), spelling)
    }

    pub fn add_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    pub fn add_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    /// Mutable access, for linking entities created out of order
    /// (record fields, forward declarations).
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    pub fn push_top_level(&mut self, id: DeclId) {
        self.top_level.push(id);
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn tokens(&self) -> &[RawToken] {
        &self.tokens
    }

    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    /// Top-level declarations in document order.
    pub fn top_level(&self) -> &[DeclId] {
        &self.top_level
    }

    pub fn decls(&self) -> impl Iterator<Item = (DeclId, &Decl)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId(i as u32), decl))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
