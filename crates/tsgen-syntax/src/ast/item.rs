use super::{Expr, Type};

/// A top-level statement of a generated module.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    ImportType(ImportType),
    TypeAlias(TypeAlias),
    Const(ConstDecl),
}

/// `import type { A, B } from "module";`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportType {
    pub names: Vec<String>,
    pub from: String,
}

/// `export type Name<P> = ty;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub name: String,

    /// Generic parameter names
    pub params: Vec<String>,

    pub ty: Type,

    pub exported: bool,

    /// Rendered as a JSDoc block above the declaration
    pub docs: Option<String>,
}

/// `export const name = init;`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: String,
    pub init: Expr,
    pub exported: bool,
    pub docs: Option<String>,
}

impl Item {
    pub fn import_type<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        from: impl Into<String>,
    ) -> Self {
        ImportType {
            names: names.into_iter().map(Into::into).collect(),
            from: from.into(),
        }
        .into()
    }

    /// An exported, non-generic type alias.
    pub fn type_alias(name: impl Into<String>, ty: Type) -> Self {
        TypeAlias {
            name: name.into(),
            params: vec![],
            ty,
            exported: true,
            docs: None,
        }
        .into()
    }

    /// An exported `const` declaration.
    pub fn constant(name: impl Into<String>, init: Expr) -> Self {
        ConstDecl {
            name: name.into(),
            init,
            exported: true,
            docs: None,
        }
        .into()
    }

    /// Attaches documentation to a declaration. Imports are returned
    /// unchanged.
    pub fn with_docs(mut self, docs: Option<String>) -> Self {
        match &mut self {
            Self::TypeAlias(alias) => alias.docs = docs,
            Self::Const(decl) => decl.docs = docs,
            Self::ImportType(_) => {}
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::TypeAlias(alias) => Some(&alias.name),
            Self::Const(decl) => Some(&decl.name),
            Self::ImportType(_) => None,
        }
    }

    pub fn as_type_alias(&self) -> Option<&TypeAlias> {
        match self {
            Self::TypeAlias(alias) => Some(alias),
            _ => None,
        }
    }

    pub fn as_const(&self) -> Option<&ConstDecl> {
        match self {
            Self::Const(decl) => Some(decl),
            _ => None,
        }
    }
}

impl From<ImportType> for Item {
    fn from(value: ImportType) -> Self {
        Self::ImportType(value)
    }
}

impl From<TypeAlias> for Item {
    fn from(value: TypeAlias) -> Self {
        Self::TypeAlias(value)
    }
}

impl From<ConstDecl> for Item {
    fn from(value: ConstDecl) -> Self {
        Self::Const(value)
    }
}
