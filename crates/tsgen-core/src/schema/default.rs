use serde::Deserialize;

/// Default value descriptor attached to a field.
///
/// Either a call to a generator function (`autoincrement()`, `now()`,
/// `uuid()`, ...) or a plain literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Function {
        name: String,

        #[serde(default)]
        args: Vec<serde_json::Value>,
    },
    Literal(serde_json::Value),
}

impl DefaultValue {
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function {
            name: name.into(),
            args: vec![],
        }
    }

    pub fn literal(value: impl Into<serde_json::Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Name of the generator function, if this is a function default.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Function { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }
}
