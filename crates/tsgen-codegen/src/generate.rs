use crate::emit::TypeScript;
use crate::{generate_database, generate_enum, generate_model, ErrorSet};

use log::info;
use tsgen_core::{Config, Datamodel, Result};
use tsgen_syntax::ast::{Item, Module, Type, TypeAlias};
use tsgen_syntax::Serializer;

/// Generates the full declaration module for `datamodel`.
///
/// Every model is generated before anything is assembled; when any model
/// fails, all failures are returned together and no module is produced.
pub fn generate(datamodel: &Datamodel, config: &Config) -> Result<Module> {
    config.validate()?;

    let backend = TypeScript::new(config);
    let mut errors = ErrorSet::new();
    let mut models = Vec::with_capacity(datamodel.models.len());

    for model in &datamodel.models {
        match generate_model(model, config, &backend) {
            Ok(generated) => models.push(generated),
            Err(err) => errors.push(err),
        }
    }

    if let Some(err) = errors.collect() {
        return Err(err);
    }

    let database = generate_database(&models, config);

    let mut module = Module::new();
    module.extend(helpers(config));

    for def in &datamodel.enums {
        module.extend(generate_enum(def));
    }

    for model in models {
        module.push(model.definition);
        module.push(model.column_names_definition);
    }

    module.push(database);

    info!(
        "generated {} models and {} enums",
        datamodel.models.len(),
        datamodel.enums.len()
    );

    Ok(module)
}

/// Generates the module and serializes it to TypeScript source.
pub fn generate_to_string(datamodel: &Datamodel, config: &Config) -> Result<String> {
    let module = generate(datamodel, config)?;
    Ok(Serializer::new().serialize(&module))
}

/// Import of `ColumnType` and the helper types generated declarations use.
fn helpers(config: &Config) -> Vec<Item> {
    let mut items = vec![
        Item::import_type(["ColumnType"], &config.runtime_module),
        generated_helper(),
    ];

    if config.read_only_ids {
        items.push(
            TypeAlias {
                name: "GeneratedAlways".to_string(),
                params: vec!["T".to_string()],
                ty: Type::generic(
                    "ColumnType",
                    [
                        Type::reference("T"),
                        Type::reference("never"),
                        Type::reference("never"),
                    ],
                ),
                exported: true,
                docs: None,
            }
            .into(),
        );
    }

    let date_or_string = || Type::union([Type::reference("Date"), Type::reference("string")]);
    items.push(Item::type_alias(
        "Timestamp",
        Type::generic(
            "ColumnType",
            [Type::reference("Date"), date_or_string(), date_or_string()],
        ),
    ));

    items
}

/// `Generated<T>`: a column whose value may be omitted on insert.
///
/// ```ts
/// export type Generated<T> = T extends ColumnType<infer S, infer I, infer U>
///     ? ColumnType<S, I | undefined, U>
///     : ColumnType<T, T | undefined, T>;
/// ```
fn generated_helper() -> Item {
    let optional =
        |name: &str| Type::union([Type::reference(name), Type::reference("undefined")]);

    TypeAlias {
        name: "Generated".to_string(),
        params: vec!["T".to_string()],
        ty: Type::conditional(
            Type::reference("T"),
            Type::generic(
                "ColumnType",
                [Type::infer("S"), Type::infer("I"), Type::infer("U")],
            ),
            Type::generic(
                "ColumnType",
                [Type::reference("S"), optional("I"), Type::reference("U")],
            ),
            Type::generic(
                "ColumnType",
                [Type::reference("T"), optional("T"), Type::reference("T")],
            ),
        ),
        exported: true,
        docs: None,
    }
    .into()
}
