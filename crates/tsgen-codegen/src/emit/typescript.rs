use super::{DeclarationAssembler, FieldBuilder, FieldDecl};

use tsgen_core::Config;
use tsgen_syntax::ast::{Expr, Item, Property, Type};

/// Emits TypeScript declarations for the query builder's `ColumnType`
/// conventions.
#[derive(Debug, Clone, Copy)]
pub struct TypeScript<'a> {
    config: &'a Config,
}

impl<'a> TypeScript<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl FieldBuilder for TypeScript<'_> {
    type Property = Property;

    fn property(&self, field: FieldDecl<'_>) -> Property {
        let mut ty = Type::from_source(field.ty);

        if field.list {
            ty = Type::array(ty);
        }

        if field.nullable {
            ty = Type::nullable(ty);
        }

        if field.is_id && self.config.read_only_ids {
            ty = Type::generic("GeneratedAlways", [ty]);
        } else if field.generated {
            ty = Type::generic("Generated", [ty]);
        }

        Property::new(field.name, ty).with_docs(field.documentation.map(str::to_string))
    }
}

impl DeclarationAssembler for TypeScript<'_> {
    type Declaration = Item;

    fn type_declaration(
        &self,
        name: &str,
        documentation: Option<&str>,
        properties: Vec<Property>,
    ) -> Item {
        Item::type_alias(name, Type::object(properties))
            .with_docs(documentation.map(str::to_string))
    }

    fn column_list(&self, name: &str, values: &[String]) -> Item {
        Item::constant(name, Expr::array(values.iter().map(Expr::string)).as_const())
    }
}
