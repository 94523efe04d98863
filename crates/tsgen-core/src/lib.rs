mod config;
pub use config::{CaseConvention, Config, DatabaseProvider};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Datamodel;

/// A Result type alias that uses tsgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
