pub mod ast;
pub use ast::{Item, Module};

mod ident;
pub use ident::is_identifier;

pub mod serializer;
pub use serializer::Serializer;
