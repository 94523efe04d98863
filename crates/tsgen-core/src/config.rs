use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Options that shape the generated declarations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Case convention applied to column and table names
    pub case: CaseConvention,

    /// Database whose scalar type table is used
    pub provider: DatabaseProvider,

    /// When set, id fields are never writable
    pub read_only_ids: bool,

    /// Name of the generated database interface
    pub db_type_name: String,

    /// Output types keyed by scalar name, consulted before the provider table
    pub type_overrides: IndexMap<String, String>,

    /// Module that provides the `ColumnType` helper
    pub runtime_module: String,
}

/// Naming convention for identifiers in the generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum CaseConvention {
    /// Names are emitted as they appear in the schema
    #[default]
    #[serde(rename = "unchanged")]
    Unchanged,

    /// `createdAt`
    #[serde(rename = "camelCase")]
    Camel,

    /// `created_at`
    #[serde(rename = "snake_case")]
    Snake,

    /// `CreatedAt`
    #[serde(rename = "PascalCase")]
    Pascal,
}

/// Database the generated types describe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    #[default]
    Postgresql,
    Cockroachdb,
    Mysql,
    Sqlite,
    Sqlserver,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: CaseConvention::Unchanged,
            provider: DatabaseProvider::Postgresql,
            read_only_ids: false,
            db_type_name: "DB".to_string(),
            type_overrides: IndexMap::new(),
            runtime_module: "kysely".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case convention
    pub fn case(mut self, case: CaseConvention) -> Self {
        self.case = case;
        self
    }

    /// Set the database provider
    pub fn provider(mut self, provider: DatabaseProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Mark id fields as never writable
    pub fn read_only_ids(mut self, read_only_ids: bool) -> Self {
        self.read_only_ids = read_only_ids;
        self
    }

    /// Set the name of the database interface
    pub fn db_type_name(mut self, name: impl Into<String>) -> Self {
        self.db_type_name = name.into();
        self
    }

    /// Override the output type of a scalar
    pub fn type_override(mut self, scalar: impl Into<String>, ty: impl Into<String>) -> Self {
        self.type_overrides.insert(scalar.into(), ty.into());
        self
    }

    /// Set the module the `ColumnType` helper is imported from
    pub fn runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    /// Checks values that deserialize fine but cannot produce valid output.
    pub fn validate(&self) -> Result<()> {
        if self.db_type_name.trim().is_empty() {
            return Err(Error::invalid_config("`db_type_name` must not be empty"));
        }

        if self.runtime_module.trim().is_empty() {
            return Err(Error::invalid_config("`runtime_module` must not be empty"));
        }

        if let Some((scalar, _)) = self.type_overrides.iter().find(|(_, ty)| ty.trim().is_empty()) {
            return Err(Error::invalid_config(format!(
                "type override for `{scalar}` must not be empty"
            )));
        }

        Ok(())
    }
}

impl FromStr for CaseConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unchanged" => Ok(Self::Unchanged),
            "camelCase" | "camel" => Ok(Self::Camel),
            "snake_case" | "snake" => Ok(Self::Snake),
            "PascalCase" | "pascalCase" | "pascal" => Ok(Self::Pascal),
            _ => Err(Error::invalid_config(format!(
                "unknown case convention `{s}`"
            ))),
        }
    }
}

impl FromStr for DatabaseProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            "cockroachdb" => Ok(Self::Cockroachdb),
            "mysql" => Ok(Self::Mysql),
            "sqlite" => Ok(Self::Sqlite),
            "sqlserver" => Ok(Self::Sqlserver),
            _ => Err(Error::invalid_config(format!(
                "unknown database provider `{s}`"
            ))),
        }
    }
}

impl fmt::Display for DatabaseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Postgresql => "postgresql",
            Self::Cockroachdb => "cockroachdb",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Sqlserver => "sqlserver",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.case, CaseConvention::Unchanged);
        assert_eq!(config.provider, DatabaseProvider::Postgresql);
        assert_eq!(config.db_type_name, "DB");
        assert_eq!(config.runtime_module, "kysely");
        assert!(!config.read_only_ids);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_from_toml() {
        let config: Config = toml::from_str(
            r#"
            case = "camelCase"
            provider = "sqlite"
            read_only_ids = true

            [type_overrides]
            DateTime = "Date"
            "#,
        )
        .unwrap();

        assert_eq!(config.case, CaseConvention::Camel);
        assert_eq!(config.provider, DatabaseProvider::Sqlite);
        assert!(config.read_only_ids);
        assert_eq!(config.type_overrides["DateTime"], "Date");
        assert_eq!(config.db_type_name, "DB");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let res = toml::from_str::<Config>("camel_case = true");
        assert!(res.is_err());
    }

    #[test]
    fn parse_case_convention() {
        assert_eq!("snake_case".parse::<CaseConvention>().unwrap(), CaseConvention::Snake);
        assert_eq!("pascal".parse::<CaseConvention>().unwrap(), CaseConvention::Pascal);

        let err = "kebab-case".parse::<CaseConvention>().unwrap_err();
        assert!(err.is_invalid_config());
        assert_eq!(err.to_string(), "invalid config: unknown case convention `kebab-case`");
    }

    #[test]
    fn validate_rejects_empty_values() {
        let err = Config::new().db_type_name(" ").validate().unwrap_err();
        assert!(err.is_invalid_config());

        let err = Config::new()
            .type_override("Json", "")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: type override for `Json` must not be empty"
        );
    }
}
