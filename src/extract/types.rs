//! Type resolver — unwraps pointer, typedef and elaborated layers.
//!
//! Sugar types (`Typedef`, `Elaborated`, `Paren`) name another type without
//! changing it; the resolver desugars them one step at a time and looks
//! through pointers to find the record, enum or alias a declaration really
//! refers to.
//!
//! Every walk is bounded by the size of the type table, so a malformed unit
//! with a cyclic alias chain cannot hang the resolver.

use crate::syntax::{DeclId, DeclKind, TranslationUnit, TypeId, TypeKind};

/// Return and parameter types of a function prototype.
#[derive(Debug, Clone, Copy)]
pub struct ProtoSignature<'a> {
    pub ret: TypeId,
    pub params: &'a [TypeId],
}

impl ProtoSignature<'_> {
    /// Return type first, then each parameter type.
    pub fn types(&self) -> impl Iterator<Item = TypeId> + '_ {
        std::iter::once(self.ret).chain(self.params.iter().copied())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    unit: &'a TranslationUnit,
    step_limit: usize,
}

impl<'a> TypeResolver<'a> {
    pub fn new(unit: &'a TranslationUnit) -> Self {
        Self {
            unit,
            step_limit: unit.type_count() + 1,
        }
    }

    fn kind(&self, ty: TypeId) -> &'a TypeKind {
        &self.unit.ty(ty).kind
    }

    /// One desugaring step, or `None` if `ty` is not sugar.
    pub fn desugar(&self, ty: TypeId) -> Option<TypeId> {
        match self.kind(ty) {
            TypeKind::Typedef(decl) => match &self.unit.decl(*decl).kind {
                DeclKind::Typedef { underlying } => Some(*underlying),
                _ => None,
            },
            TypeKind::Elaborated(inner) | TypeKind::Paren(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Strip all sugar.
    pub fn canonical(&self, ty: TypeId) -> TypeId {
        let mut current = ty;
        for _ in 0..self.step_limit {
            match self.desugar(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// First type in the desugaring chain of `ty` that `pick` accepts.
    fn find_in_chain<T>(&self, ty: TypeId, pick: impl Fn(&'a TypeKind) -> Option<T>) -> Option<T> {
        let mut current = ty;
        for _ in 0..self.step_limit {
            if let Some(found) = pick(self.kind(current)) {
                return Some(found);
            }
            current = self.desugar(current)?;
        }
        None
    }

    pub fn is_any_pointer(&self, ty: TypeId) -> bool {
        self.pointee(ty).is_some()
    }

    pub fn pointee(&self, ty: TypeId) -> Option<TypeId> {
        match self.kind(self.canonical(ty)) {
            TypeKind::Pointer(pointee) => Some(*pointee),
            _ => None,
        }
    }

    /// Dereference pointers until a non-pointer type is reached.
    pub fn strip_pointers(&self, ty: TypeId) -> TypeId {
        let mut current = ty;
        for _ in 0..self.step_limit {
            match self.pointee(current) {
                Some(pointee) => current = pointee,
                None => break,
            }
        }
        current
    }

    /// The record declaration a type denotes, looking through sugar.
    pub fn as_record_decl(&self, ty: TypeId) -> Option<DeclId> {
        match self.kind(self.canonical(ty)) {
            TypeKind::Record(decl) => Some(*decl),
            _ => None,
        }
    }

    /// The visible definition of a record, or the declaration itself.
    pub fn record_definition(&self, record: DeclId) -> DeclId {
        match &self.unit.decl(record).kind {
            DeclKind::Record {
                definition: Some(definition),
                ..
            } => *definition,
            _ => record,
        }
    }

    /// The record a value of type `ty` refers to through any pointers,
    /// resolved to its definition when one is visible.
    pub fn referenced_record(&self, ty: TypeId) -> Option<DeclId> {
        self.as_record_decl(self.strip_pointers(ty))
            .map(|record| self.record_definition(record))
    }

    /// The outermost alias `ty` is spelled with.
    pub fn as_typedef(&self, ty: TypeId) -> Option<DeclId> {
        self.find_in_chain(ty, |kind| match kind {
            TypeKind::Typedef(decl) => Some(*decl),
            _ => None,
        })
    }

    /// The alias a declared type names: the type itself if it is an alias,
    /// else the alias left after dereferencing its pointers.
    pub fn referenced_alias(&self, ty: TypeId) -> Option<DeclId> {
        self.as_typedef(ty)
            .or_else(|| self.as_typedef(self.strip_pointers(ty)))
    }

    /// The enumeration a type names once aliases and elaborating wrappers
    /// are removed. Pointers are not looked through.
    pub fn as_named_enum(&self, ty: TypeId) -> Option<DeclId> {
        self.find_in_chain(ty, |kind| match kind {
            TypeKind::Enum(decl) => Some(*decl),
            _ => None,
        })
    }

    /// Signature of a pointer to a parenthesized function prototype,
    /// as in `int *(*callback)(st *, int)`.
    pub fn function_pointer_proto(&self, ty: TypeId) -> Option<ProtoSignature<'a>> {
        let pointee = self.pointee(ty)?;
        let inner = self.find_in_chain(pointee, |kind| match kind {
            TypeKind::Paren(inner) => Some(*inner),
            _ => None,
        })?;
        match self.kind(self.canonical(inner)) {
            TypeKind::FunctionProto { ret, params, .. } => Some(ProtoSignature {
                ret: *ret,
                params: params.as_slice(),
            }),
            _ => None,
        }
    }

    /// Whether some typedef in the unit names `record` (or its definition).
    pub fn is_typedef_target(&self, record: DeclId) -> bool {
        let target = self.record_definition(record);
        self.unit.decls().any(|(_, decl)| match &decl.kind {
            DeclKind::Typedef { underlying } => self
                .as_record_decl(*underlying)
                .is_some_and(|named| self.record_definition(named) == target),
            _ => false,
        })
    }
}
