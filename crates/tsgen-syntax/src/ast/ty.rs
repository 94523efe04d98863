use super::Property;
use crate::is_identifier;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// `Name` or `Name<A, B>`
    Reference { name: String, args: Vec<Type> },

    /// `T[]`
    Array(Box<Type>),

    /// `A | B`
    Union(Vec<Type>),

    /// `"literal"`
    StringLiteral(String),

    /// `null`
    Null,

    /// `{ a: A; b: B }`
    Object(Vec<Property>),

    /// `typeof name`
    TypeOf(String),

    /// `keyof T`
    KeyOf(Box<Type>),

    /// `T[K]`
    IndexedAccess { object: Box<Type>, index: Box<Type> },

    /// `infer T`, only valid in the `extends` clause of a conditional type
    Infer(String),

    /// `C extends E ? T : F`
    Conditional {
        check: Box<Type>,
        extends: Box<Type>,
        then: Box<Type>,
        otherwise: Box<Type>,
    },

    /// Type source text emitted as is, e.g. a user supplied override
    Raw(String),
}

impl Type {
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            args: vec![],
        }
    }

    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = Type>) -> Self {
        Self::Reference {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Parses a type written by hand: a bare name becomes a reference,
    /// anything else is kept as raw source.
    pub fn from_source(src: &str) -> Self {
        let src = src.trim();

        if is_identifier(src) {
            Self::reference(src)
        } else {
            Self::Raw(src.to_string())
        }
    }

    pub fn array(element: Type) -> Self {
        Self::Array(Box::new(element))
    }

    /// `ty | null`
    pub fn nullable(ty: Type) -> Self {
        Self::Union(vec![ty, Self::Null])
    }

    pub fn union(types: impl IntoIterator<Item = Type>) -> Self {
        Self::Union(types.into_iter().collect())
    }

    pub fn object(properties: impl IntoIterator<Item = Property>) -> Self {
        Self::Object(properties.into_iter().collect())
    }

    pub fn type_of(name: impl Into<String>) -> Self {
        Self::TypeOf(name.into())
    }

    pub fn key_of(ty: Type) -> Self {
        Self::KeyOf(Box::new(ty))
    }

    pub fn indexed_access(object: Type, index: Type) -> Self {
        Self::IndexedAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn infer(name: impl Into<String>) -> Self {
        Self::Infer(name.into())
    }

    pub fn conditional(check: Type, extends: Type, then: Type, otherwise: Type) -> Self {
        Self::Conditional {
            check: Box::new(check),
            extends: Box::new(extends),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// Returns the referenced name, if this is a type reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Property]> {
        match self {
            Self::Object(properties) => Some(properties),
            _ => None,
        }
    }

    /// Whether the type needs parentheses when it is the operand of a
    /// postfix operator (`[]` or `[K]`).
    pub(crate) fn needs_parens_as_operand(&self) -> bool {
        match self {
            Self::Union(_)
            | Self::TypeOf(_)
            | Self::KeyOf(_)
            | Self::Infer(_)
            | Self::Conditional { .. } => true,
            Self::Raw(src) => {
                PREFIX_OPERATORS.iter().any(|op| src.starts_with(op))
                    || top_level_chars(src).any(|ch| matches!(ch, '|' | '&' | '?' | '='))
            }
            _ => false,
        }
    }

    /// Whether the type needs parentheses when it is a member of a union.
    ///
    /// Function and conditional types extend as far right as possible, so
    /// `(a: A) => B | null` would make the return type nullable.
    pub(crate) fn needs_parens_in_union(&self) -> bool {
        match self {
            Self::Conditional { .. } => true,
            Self::Raw(src) => top_level_chars(src).any(|ch| matches!(ch, '?' | '=')),
            _ => false,
        }
    }
}

const PREFIX_OPERATORS: [&str; 4] = ["keyof ", "typeof ", "readonly ", "unique "];

/// Characters of `src` outside of any brackets or string literals.
fn top_level_chars(src: &str) -> impl Iterator<Item = char> + '_ {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;
    let mut prev = None;

    src.chars().filter(move |&ch| {
        let last = prev.replace(ch);

        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            return false;
        }

        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            // The `>` of `=>` closes nothing
            '>' if last == Some('=') => {}
            '>' => depth = depth.saturating_sub(1),
            _ => return depth == 0,
        }

        false
    })
}
