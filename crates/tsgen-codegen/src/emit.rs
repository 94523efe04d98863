//! Seams between the generator's decisions and the output syntax.
//!
//! The model generator only decides *what* each field looks like. A backend
//! turns those decisions into declarations of some output syntax.

mod typescript;
pub use typescript::TypeScript;

/// Everything the generator resolved about one retained field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl<'a> {
    /// Normalized column name, used as the property key
    pub name: &'a str,

    /// Output type expression, before any wrapping
    pub ty: &'a str,

    /// The column accepts null
    pub nullable: bool,

    /// The database supplies the value when omitted on insert
    pub generated: bool,

    pub list: bool,

    pub is_id: bool,

    pub documentation: Option<&'a str>,
}

/// Builds one property of a model type.
pub trait FieldBuilder {
    type Property;

    fn property(&self, field: FieldDecl<'_>) -> Self::Property;
}

/// Assembles the declarations of a generated model.
pub trait DeclarationAssembler: FieldBuilder {
    type Declaration;

    /// One object type named `name` with `properties` in order.
    fn type_declaration(
        &self,
        name: &str,
        documentation: Option<&str>,
        properties: Vec<Self::Property>,
    ) -> Self::Declaration;

    /// One constant named `name` holding `values` as a literal sequence
    /// whose element types are not widened.
    fn column_list(&self, name: &str, values: &[String]) -> Self::Declaration;
}
