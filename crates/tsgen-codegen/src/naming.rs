use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use tsgen_core::{CaseConvention, Config};

/// Applies the configured case convention to a column or table name.
pub fn normalize(raw: &str, config: &Config) -> String {
    match config.case {
        CaseConvention::Unchanged => raw.to_string(),
        CaseConvention::Camel => raw.to_lower_camel_case(),
        CaseConvention::Snake => raw.to_snake_case(),
        CaseConvention::Pascal => raw.to_upper_camel_case(),
    }
}
