use super::Error;

/// Error when field documentation contains a type directive that cannot be
/// parsed.
///
/// This occurs when:
/// - The directive name is not followed by an argument list
/// - The argument list is never closed (unbalanced parentheses or quotes)
/// - The argument list is empty
#[derive(Debug)]
pub(super) struct MalformedDirective {
    message: Box<str>,
}

impl std::error::Error for MalformedDirective {}

impl core::fmt::Display for MalformedDirective {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed documentation directive: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed documentation directive error.
    pub fn malformed_directive(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedDirective(MalformedDirective {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed documentation directive error.
    pub fn is_malformed_directive(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::MalformedDirective(_)))
    }
}
