use log::debug;
use tsgen_core::schema::Enum;
use tsgen_syntax::ast::{Expr, Item, Type};

/// Generates a constant object holding the enum's values and a type alias
/// for the union of those values, both named after the enum.
pub fn generate_enum(def: &Enum) -> [Item; 2] {
    let values = Expr::object(
        def.values
            .iter()
            .map(|value| (value.name.as_str(), Expr::string(value.storage_name()))),
    );

    let ty = Type::indexed_access(
        Type::type_of(&def.name),
        Type::key_of(Type::type_of(&def.name)),
    );

    debug!("generated enum `{}`; values={}", def.name, def.values.len());

    [
        Item::constant(&def.name, values.as_const()).with_docs(def.documentation.clone()),
        Item::type_alias(&def.name, ty),
    ]
}
