use super::DefaultValue;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The field name
    pub name: String,

    /// Database-level column name
    #[serde(default)]
    pub db_name: Option<String>,

    /// Scalar, enum, relation, ...
    pub kind: FieldKind,

    /// Declared type name: a scalar (`String`, `DateTime`), an enum name or
    /// a related model name
    #[serde(rename = "type")]
    pub ty: String,

    /// False if the field may be null
    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_list: bool,

    /// True if the field is the model's id
    #[serde(default)]
    pub is_id: bool,

    #[serde(default)]
    pub has_default_value: bool,

    #[serde(default)]
    pub default: Option<DefaultValue>,

    /// Free-text documentation, possibly carrying a type directive
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    Scalar,
    Enum,

    /// Relation to another model
    Object,

    /// Type the schema language cannot represent
    Unsupported,

    /// Any kind string not listed above
    Unknown(String),
}

impl Field {
    /// Creates a required, non-list field with no default.
    pub fn new(name: impl Into<String>, kind: FieldKind, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            kind,
            ty: ty.into(),
            is_required: true,
            is_list: false,
            is_id: false,
            has_default_value: false,
            default: None,
            documentation: None,
        }
    }

    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, ty)
    }

    pub fn db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Sets the default and marks the field as having one.
    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.has_default_value = true;
        self.default = Some(default);
        self
    }

    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Name of the backing column: `db_name` when set, else `name`.
    pub fn storage_name(&self) -> &str {
        match self.db_name.as_deref() {
            Some(db_name) if !db_name.is_empty() => db_name,
            _ => &self.name,
        }
    }

    pub fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }
}

impl FieldKind {
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Object)
    }
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        match &value[..] {
            "scalar" => Self::Scalar,
            "enum" => Self::Enum,
            "object" => Self::Object,
            "unsupported" => Self::Unsupported,
            _ => Self::Unknown(value),
        }
    }
}

impl From<&str> for FieldKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Unsupported => "unsupported",
            Self::Unknown(kind) => kind,
        })
    }
}
