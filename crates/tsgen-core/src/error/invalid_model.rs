use super::Error;

/// Error when the input schema is structurally impossible, e.g. a field
/// whose kind is none of `scalar`, `enum`, `object` or `unsupported`.
#[derive(Debug)]
pub(super) struct InvalidModel {
    message: Box<str>,
}

impl std::error::Error for InvalidModel {}

impl core::fmt::Display for InvalidModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid model error.
    pub fn invalid_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModel {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid model error.
    pub fn is_invalid_model(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::InvalidModel(_)))
    }
}
