mod database;
pub use database::generate_database;

mod default;
pub use default::{is_generated, DEFAULTS_IMPLEMENTED_IN_CLIENT};

mod directive;
pub use directive::type_override;

pub mod emit;

mod enums;
pub use enums::generate_enum;

mod error_set;
use error_set::ErrorSet;

mod generate;
pub use generate::{generate, generate_to_string};

mod model;
pub use model::{generate_model, GeneratedModel};

mod naming;
pub use naming::normalize;

mod ty;
pub use ty::resolve_type;
