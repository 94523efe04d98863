use super::Field;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// The model name, also used as the generated type name
    pub name: String,

    /// Database-level table name
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub documentation: Option<String>,
}

impl Model {
    /// Returns the table name, falling back to the model name when the
    /// database name is missing or empty.
    pub fn table_name(&self) -> &str {
        match self.db_name.as_deref() {
            Some(db_name) if !db_name.is_empty() => db_name,
            _ => &self.name,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
