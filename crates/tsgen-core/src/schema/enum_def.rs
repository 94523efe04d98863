use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    /// The enum name, also used as the generated type name
    pub name: String,

    pub values: Vec<EnumValue>,

    /// Database-level name of the enum type
    #[serde(default)]
    pub db_name: Option<String>,

    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,

    /// Value stored in the database, when it differs from `name`
    #[serde(default)]
    pub db_name: Option<String>,
}

impl EnumValue {
    /// The value as it is stored and returned by the database.
    pub fn storage_name(&self) -> &str {
        match self.db_name.as_deref() {
            Some(db_name) if !db_name.is_empty() => db_name,
            _ => &self.name,
        }
    }
}
