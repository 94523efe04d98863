use crate::{naming, GeneratedModel};

use tsgen_core::Config;
use tsgen_syntax::ast::{Item, Property, Type};

/// Generates the database type mapping every table name to its model
/// type, sorted by table name.
pub fn generate_database<D>(models: &[GeneratedModel<D>], config: &Config) -> Item {
    let mut tables: Vec<_> = models
        .iter()
        .map(|model| (naming::normalize(&model.table_name, config), &model.type_name))
        .collect();

    tables.sort_by(|a, b| a.0.cmp(&b.0));

    let properties = tables
        .into_iter()
        .map(|(table_name, type_name)| Property::new(table_name, Type::reference(type_name)));

    Item::type_alias(&config.db_type_name, Type::object(properties))
}
