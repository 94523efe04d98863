mod datamodel;
pub use datamodel::Datamodel;

mod default;
pub use default::DefaultValue;

mod enum_def;
pub use enum_def::{Enum, EnumValue};

mod field;
pub use field::{Field, FieldKind};

mod model;
pub use model::Model;
