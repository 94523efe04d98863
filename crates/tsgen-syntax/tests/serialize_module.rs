use pretty_assertions::assert_eq;
use tsgen_syntax::{ast::*, Serializer};

#[test]
fn column_list_constant() {
    let item = Item::constant(
        "columnsOfUser",
        Expr::array([Expr::string("id"), Expr::string("email")]).as_const(),
    );

    assert_eq!(
        Serializer::new().serialize_item(&item),
        "export const columnsOfUser = [
    \"id\",
    \"email\"
] as const;"
    );
}

#[test]
fn empty_column_list_constant() {
    let item = Item::constant("columnsOfEmpty", Expr::array([]).as_const());

    assert_eq!(
        Serializer::new().serialize_item(&item),
        "export const columnsOfEmpty = [] as const;"
    );
}

#[test]
fn object_constant() {
    let item = Item::constant(
        "Role",
        Expr::object([
            ("ADMIN", Expr::string("ADMIN")),
            ("read-only", Expr::string("read_only")),
        ])
        .as_const(),
    );

    assert_eq!(
        Serializer::new().serialize_item(&item),
        "export const Role = {
    ADMIN: \"ADMIN\",
    \"read-only\": \"read_only\"
} as const;"
    );
}

#[test]
fn generic_type_alias() {
    let item: Item = TypeAlias {
        name: "Nullable".to_string(),
        params: vec!["T".to_string()],
        ty: Type::nullable(Type::reference("T")),
        exported: false,
        docs: None,
    }
    .into();

    assert_eq!(
        Serializer::new().serialize_item(&item),
        "type Nullable<T> = T | null;"
    );
}

#[test]
fn module() {
    let mut module = Module::new();
    module.push(Item::import_type(["ColumnType"], "kysely"));
    module.push(Item::type_alias(
        "Timestamp",
        Type::generic(
            "ColumnType",
            [
                Type::reference("Date"),
                Type::union([Type::reference("Date"), Type::reference("string")]),
                Type::union([Type::reference("Date"), Type::reference("string")]),
            ],
        ),
    ));
    module.push(
        Item::type_alias(
            "User",
            Type::object([
                Property::new("id", Type::generic("Generated", [Type::reference("number")])),
                Property::new("email", Type::nullable(Type::reference("string"))),
            ]),
        )
        .with_docs(Some("A registered user".to_string())),
    );

    assert_eq!(
        Serializer::new().serialize(&module),
        "import type { ColumnType } from \"kysely\";

export type Timestamp = ColumnType<Date, Date | string, Date | string>;

/**
 * A registered user
 */
export type User = {
    id: Generated<number>;
    email: string | null;
};
"
    );

    assert!(module.find("User", true).is_some());
    assert!(module.find("User", false).is_none());
}

#[test]
fn conditional_type_follows_indent_width() {
    let item: Item = TypeAlias {
        name: "Generated".to_string(),
        params: vec!["T".to_string()],
        ty: Type::conditional(
            Type::reference("T"),
            Type::generic("ColumnType", [Type::infer("S"), Type::infer("I")]),
            Type::generic("ColumnType", [Type::reference("S"), Type::reference("I")]),
            Type::reference("T"),
        ),
        exported: true,
        docs: None,
    }
    .into();

    assert_eq!(
        Serializer::new().indent(2).serialize_item(&item),
        "export type Generated<T> = T extends ColumnType<infer S, infer I>
  ? ColumnType<S, I>
  : T;"
    );
}

#[test]
fn empty_module() {
    assert_eq!(Serializer::new().serialize(&Module::new()), "");
}
