use tsgen_core::schema::{DefaultValue, Field};

/// Default generators that run in the client library rather than in the
/// database. Fields using them are still written by the caller, so they are
/// not marked as generated.
pub const DEFAULTS_IMPLEMENTED_IN_CLIENT: &[&str] = &["cuid", "uuid"];

/// Returns `true` if the database fills in the field's value when it is
/// omitted on insert.
pub fn is_generated(field: &Field) -> bool {
    field.has_default_value && !is_implemented_in_client(field.default.as_ref())
}

fn is_implemented_in_client(default: Option<&DefaultValue>) -> bool {
    default
        .and_then(DefaultValue::function_name)
        .is_some_and(|name| DEFAULTS_IMPLEMENTED_IN_CLIENT.contains(&name))
}
