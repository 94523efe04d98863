use super::Type;

/// One member of an object type: `name: ty;`
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property key. Keys that are not valid identifiers are quoted when
    /// printed.
    pub name: String,

    pub ty: Type,

    /// Rendered as a JSDoc block above the property
    pub docs: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            docs: None,
        }
    }

    pub fn with_docs(mut self, docs: Option<String>) -> Self {
        self.docs = docs;
        self
    }
}
