use tsgen_codegen::emit::{DeclarationAssembler, FieldBuilder, FieldDecl, TypeScript};
use tsgen_codegen::{generate_model, GeneratedModel};
use tsgen_core::schema::{DefaultValue, Field, FieldKind, Model};
use tsgen_core::{CaseConvention, Config};
use tsgen_syntax::Serializer;

/// Backend that records the resolved fields instead of building syntax.
struct Recorder;

#[derive(Debug, Clone, PartialEq)]
struct Prop {
    name: String,
    ty: String,
    nullable: bool,
    generated: bool,
    list: bool,
    is_id: bool,
    documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Decl {
    Type {
        name: String,
        documentation: Option<String>,
        properties: Vec<Prop>,
    },
    Columns { name: String, values: Vec<String> },
}

impl FieldBuilder for Recorder {
    type Property = Prop;

    fn property(&self, field: FieldDecl<'_>) -> Prop {
        Prop {
            name: field.name.to_string(),
            ty: field.ty.to_string(),
            nullable: field.nullable,
            generated: field.generated,
            list: field.list,
            is_id: field.is_id,
            documentation: field.documentation.map(str::to_string),
        }
    }
}

impl DeclarationAssembler for Recorder {
    type Declaration = Decl;

    fn type_declaration(
        &self,
        name: &str,
        documentation: Option<&str>,
        properties: Vec<Prop>,
    ) -> Decl {
        Decl::Type {
            name: name.to_string(),
            documentation: documentation.map(str::to_string),
            properties,
        }
    }

    fn column_list(&self, name: &str, values: &[String]) -> Decl {
        Decl::Columns {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }
}

fn model(name: &str, fields: Vec<Field>) -> Model {
    Model {
        name: name.to_string(),
        db_name: None,
        fields,
        documentation: None,
    }
}

fn record(model: &Model, config: &Config) -> (Vec<Prop>, Vec<String>) {
    let generated = generate_model(model, config, &Recorder).unwrap();

    let Decl::Type {
        name,
        documentation,
        properties,
    } = generated.definition
    else {
        panic!("expected type declaration");
    };
    assert_eq!(name, model.name);
    assert_eq!(documentation, model.documentation);

    let Decl::Columns { name, values } = generated.column_names_definition else {
        panic!("expected column list");
    };
    assert_eq!(name, format!("columnsOf{}", model.name));

    (properties, values)
}

fn prop<'a>(properties: &'a [Prop], name: &str) -> &'a Prop {
    properties
        .iter()
        .find(|prop| prop.name == name)
        .unwrap_or_else(|| panic!("no property `{name}`"))
}

#[test]
fn empty_model() {
    let (properties, columns) = record(&model("Empty", vec![]), &Config::new());

    assert!(properties.is_empty());
    assert!(columns.is_empty());
}

#[test]
fn relation_and_unsupported_fields_are_skipped() {
    let fields = vec![
        Field::scalar("id", "Int").id(),
        Field::new("posts", FieldKind::Object, "Post").list().optional(),
        Field::new("author", FieldKind::Object, "User")
            .id()
            .default_value(DefaultValue::function("autoincrement")),
        Field::new("location", FieldKind::Unsupported, "point")
            .documentation("@tsType(Point)"),
        Field::scalar("title", "String"),
    ];

    let (properties, columns) = record(&model("Post", fields), &Config::new());

    assert_eq!(columns, ["id", "title"]);
    let names: Vec<_> = properties.iter().map(|prop| prop.name.as_str()).collect();
    assert_eq!(names, ["id", "title"]);
}

#[test]
fn nullable_is_the_inverse_of_required() {
    let fields = vec![
        Field::scalar("required", "String"),
        Field::scalar("optional", "String").optional(),
        Field::new("status", FieldKind::Enum, "Status").optional(),
    ];

    let (properties, _) = record(&model("Row", fields), &Config::new());

    assert!(!prop(&properties, "required").nullable);
    assert!(prop(&properties, "optional").nullable);
    assert!(prop(&properties, "status").nullable);
}

#[test]
fn generated_classification() {
    let fields = vec![
        Field::scalar("plain", "String"),
        Field::scalar("serial", "Int").default_value(DefaultValue::function("autoincrement")),
        Field::scalar("created", "DateTime").default_value(DefaultValue::function("now")),
        Field::scalar("uuid", "String").default_value(DefaultValue::function("uuid")),
        Field::scalar("cuid", "String").default_value(DefaultValue::function("cuid")),
        Field::scalar("count", "Int").default_value(DefaultValue::literal(0)),
        Field::new("role", FieldKind::Enum, "Role").default_value(DefaultValue::literal("USER")),
    ];

    let (properties, _) = record(&model("Row", fields), &Config::new());

    assert!(!prop(&properties, "plain").generated);
    assert!(prop(&properties, "serial").generated);
    assert!(prop(&properties, "created").generated);
    assert!(!prop(&properties, "uuid").generated);
    assert!(!prop(&properties, "cuid").generated);
    assert!(prop(&properties, "count").generated);
    assert!(prop(&properties, "role").generated);
}

#[test]
fn columns_follow_retained_field_order() {
    let fields = vec![
        Field::scalar("b", "String"),
        Field::new("rel", FieldKind::Object, "Other"),
        Field::scalar("a", "String").db_name("a_column"),
        Field::scalar("c", "Int").list(),
    ];

    let (properties, columns) = record(&model("Row", fields), &Config::new());

    assert_eq!(columns, ["b", "a_column", "c"]);
    assert_eq!(properties.len(), columns.len());
    for (prop, column) in properties.iter().zip(&columns) {
        assert_eq!(&prop.name, column);
    }
    assert!(prop(&properties, "c").list);
}

#[test]
fn table_name_falls_back_to_model_name() {
    let mut with_db_name = model("User", vec![]);
    with_db_name.db_name = Some("users".to_string());
    let generated = generate_model(&with_db_name, &Config::new(), &Recorder).unwrap();
    assert_eq!(generated.table_name, "users");
    assert_eq!(generated.type_name, "User");

    let mut empty_db_name = model("User", vec![]);
    empty_db_name.db_name = Some(String::new());
    let generated = generate_model(&empty_db_name, &Config::new(), &Recorder).unwrap();
    assert_eq!(generated.table_name, "User");

    let generated = generate_model(&model("User", vec![]), &Config::new(), &Recorder).unwrap();
    assert_eq!(generated.table_name, "User");
}

#[test]
fn case_convention_applies_to_column_names() {
    let fields = vec![
        Field::scalar("createdAt", "DateTime"),
        Field::scalar("userId", "Int").db_name("user_id"),
    ];
    let config = Config::new().case(CaseConvention::Camel);

    let (_, columns) = record(&model("Row", fields), &config);

    assert_eq!(columns, ["createdAt", "userId"]);
}

#[test]
fn id_and_documentation_are_carried_through() {
    let fields = vec![Field::scalar("id", "Int")
        .id()
        .documentation("Row identifier")];

    let (properties, _) = record(&model("Row", fields), &Config::new());

    let id = prop(&properties, "id");
    assert!(id.is_id);
    assert_eq!(id.documentation.as_deref(), Some("Row identifier"));
}

#[test]
fn documentation_directive_overrides_scalar_type() {
    let fields = vec![
        Field::scalar("email", "String").documentation("@tsType(Email)"),
        Field::scalar("contact", "String").documentation("@zod.string.email()"),
        Field::scalar("plain", "String"),
    ];

    let (properties, _) = record(&model("Row", fields), &Config::new());

    assert_eq!(prop(&properties, "email").ty, "Email");
    assert_eq!(prop(&properties, "contact").ty, "string");
    assert_eq!(prop(&properties, "plain").ty, "string");
}

#[test]
fn enum_fields_use_their_own_type_name() {
    let fields = vec![
        Field::new("role", FieldKind::Enum, "Role").documentation("@tsType(string)"),
        Field::new("roles", FieldKind::Enum, "Role").list(),
    ];
    let config = Config::new().type_override("Role", "never");

    let (properties, _) = record(&model("Row", fields), &config);

    assert_eq!(prop(&properties, "role").ty, "Role");
    assert_eq!(prop(&properties, "roles").ty, "Role");
    assert!(prop(&properties, "roles").list);
}

#[test]
fn unknown_field_kind_fails_the_model() {
    let fields = vec![
        Field::scalar("id", "Int"),
        Field::new("shape", FieldKind::from("composite"), "Shape"),
    ];

    let err = generate_model(&model("Drawing", fields), &Config::new(), &Recorder).unwrap_err();

    assert!(err.is_invalid_model());
    assert_eq!(
        err.to_string(),
        "model `Drawing`, field `shape` (composite `Shape`): \
         invalid model: unrecognized field kind `composite`"
    );
}

#[test]
fn unmapped_scalar_fails_the_model() {
    let fields = vec![Field::scalar("area", "Geometry")];

    let err = generate_model(&model("Place", fields), &Config::new(), &Recorder).unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(
        err.to_string(),
        "model `Place`, field `area` (scalar `Geometry`): \
         unresolved type: no postgresql mapping for scalar `Geometry`"
    );
}

#[test]
fn malformed_directive_fails_the_model() {
    let fields = vec![
        Field::scalar("ok", "String"),
        Field::scalar("bad", "String").documentation("@tsType(Record<string, number>"),
    ];

    let err = generate_model(&model("Row", fields), &Config::new(), &Recorder).unwrap_err();

    assert!(err.is_malformed_directive());
    assert!(err.to_string().starts_with("model `Row`, field `bad` (scalar `String`): "));
}

#[test]
fn model_documentation_is_attached() {
    let mut documented = model("Row", vec![Field::scalar("id", "Int")]);
    documented.documentation = Some("One row per event".to_string());
    let config = Config::new();

    let generated = generate_model(&documented, &config, &TypeScript::new(&config)).unwrap();

    pretty_assertions::assert_eq!(
        Serializer::new().serialize_item(&generated.definition),
        "/**
 * One row per event
 */
export type Row = {
    id: number;
};"
    );

    // The recording backend sees the same text.
    record(&documented, &config);
}

#[test]
fn id_and_email_with_typescript_backend() {
    let fields = vec![
        Field::scalar("id", "Int")
            .id()
            .default_value(DefaultValue::function("autoincrement")),
        Field::scalar("email", "String"),
    ];
    let config = Config::new();

    let GeneratedModel {
        type_name,
        table_name,
        definition,
        column_names_definition,
    } = generate_model(&model("Model", fields), &config, &TypeScript::new(&config)).unwrap();

    assert_eq!(type_name, "Model");
    assert_eq!(table_name, "Model");

    let serializer = Serializer::new();
    pretty_assertions::assert_eq!(
        serializer.serialize_item(&definition),
        "export type Model = {
    id: Generated<number>;
    email: string;
};"
    );
    pretty_assertions::assert_eq!(
        serializer.serialize_item(&column_names_definition),
        "export const columnsOfModel = [
    \"id\",
    \"email\"
] as const;"
    );
}
