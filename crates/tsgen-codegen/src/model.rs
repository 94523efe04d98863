use crate::emit::{DeclarationAssembler, FieldBuilder, FieldDecl};
use crate::{default, directive, naming, ty};

use log::{debug, trace};
use tsgen_core::schema::{Field, FieldKind, Model};
use tsgen_core::{err, Config, Error, Result};

/// Declarations generated for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel<D> {
    /// Name of the model type, same as the model name
    pub type_name: String,

    /// Database table backing the model
    pub table_name: String,

    /// `type <Model> = { ... }`
    pub definition: D,

    /// `const columnsOf<Model> = [ ... ]`
    pub column_names_definition: D,
}

/// Generates the type declaration and column list for `model`.
///
/// Relation and unsupported fields are skipped. Every other field becomes
/// one property and one column name, in declaration order. Nothing is
/// returned unless every field resolves.
pub fn generate_model<B>(
    model: &Model,
    config: &Config,
    backend: &B,
) -> Result<GeneratedModel<B::Declaration>>
where
    B: DeclarationAssembler,
{
    let mut column_names = vec![];
    let mut properties = vec![];

    for field in &model.fields {
        let generated = generate_field(field, config, backend).map_err(|err| {
            err.context(err!(
                "model `{}`, field `{}` ({} `{}`)",
                model.name,
                field.name,
                field.kind,
                field.ty
            ))
        })?;

        if let Some((column_name, property)) = generated {
            column_names.push(column_name);
            properties.push(property);
        }
    }

    debug!(
        "generated model `{}`; columns={}; skipped={}",
        model.name,
        column_names.len(),
        model.fields.len() - column_names.len()
    );

    let column_list_name = format!("columnsOf{}", model.name);

    Ok(GeneratedModel {
        type_name: model.name.clone(),
        table_name: model.table_name().to_string(),
        definition: backend.type_declaration(
            &model.name,
            model.documentation.as_deref(),
            properties,
        ),
        column_names_definition: backend.column_list(&column_list_name, &column_names),
    })
}

/// Returns the column name and property for a retained field, `None` for a
/// skipped one.
fn generate_field<B>(
    field: &Field,
    config: &Config,
    backend: &B,
) -> Result<Option<(String, B::Property)>>
where
    B: FieldBuilder,
{
    let generated = default::is_generated(field);

    let type_override = match &field.documentation {
        Some(documentation) => directive::type_override(documentation)?,
        None => None,
    };

    let ty = match &field.kind {
        FieldKind::Object | FieldKind::Unsupported => {
            trace!("skipping {} field `{}`", field.kind, field.name);
            return Ok(None);
        }
        FieldKind::Unknown(kind) => {
            return Err(Error::invalid_model(format!(
                "unrecognized field kind `{kind}`"
            )));
        }
        // Enums are referenced by name and never mapped or overridden.
        FieldKind::Enum => field.ty.clone(),
        FieldKind::Scalar => ty::resolve_type(&field.ty, config, type_override.as_deref())?,
    };

    let name = naming::normalize(field.storage_name(), config);

    trace!(
        "field `{}` -> `{}`: {}; generated={}; nullable={}; list={}",
        field.name,
        name,
        ty,
        generated,
        !field.is_required,
        field.is_list
    );

    let property = backend.property(FieldDecl {
        name: &name,
        ty: &ty,
        nullable: !field.is_required,
        generated,
        list: field.is_list,
        is_id: field.is_id,
        documentation: field.documentation.as_deref(),
    });

    Ok(Some((name, property)))
}
