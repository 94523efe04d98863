use tsgen_core::{Config, DatabaseProvider, Error, Result};

/// Resolves the output type for a scalar field.
///
/// A documentation override wins, then a configured override for the
/// scalar, then the provider's built-in table.
pub fn resolve_type(declared: &str, config: &Config, type_override: Option<&str>) -> Result<String> {
    if let Some(ty) = type_override {
        return Ok(ty.to_string());
    }

    if let Some(ty) = config.type_overrides.get(declared) {
        return Ok(ty.clone());
    }

    builtin(declared, config.provider)
        .map(str::to_string)
        .ok_or_else(|| Error::unresolved_type(declared, config.provider))
}

fn builtin(scalar: &str, provider: DatabaseProvider) -> Option<&'static str> {
    use DatabaseProvider::*;

    let ty = match (scalar, provider) {
        ("BigInt", Postgresql | Cockroachdb) => "string",
        ("BigInt", Mysql | Sqlite | Sqlserver) => "number",
        ("Boolean", Postgresql | Cockroachdb | Sqlserver) => "boolean",
        ("Boolean", Mysql | Sqlite) => "number",
        ("Bytes", _) => "Buffer",
        ("DateTime", Sqlite) => "string",
        ("DateTime", _) => "Timestamp",
        ("Decimal", Sqlite) => "number",
        ("Decimal", _) => "string",
        ("Float" | "Int", _) => "number",
        ("Json", _) => "unknown",
        ("String", _) => "string",
        _ => return None,
    };

    Some(ty)
}
