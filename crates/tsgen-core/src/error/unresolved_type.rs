use super::Error;
use crate::DatabaseProvider;

/// Error when a declared scalar type has no output type.
///
/// This occurs when the field carries no documentation override, the
/// configuration has no `type_overrides` entry for the scalar, and the
/// provider's built-in table does not know it either.
#[derive(Debug)]
pub(super) struct UnresolvedType {
    ty: Box<str>,
    provider: DatabaseProvider,
}

impl std::error::Error for UnresolvedType {}

impl core::fmt::Display for UnresolvedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved type: no {} mapping for scalar `{}`",
            self.provider, self.ty
        )
    }
}

impl Error {
    /// Creates an unresolved type error for the scalar `ty`.
    pub fn unresolved_type(ty: impl Into<String>, provider: DatabaseProvider) -> Error {
        Error::from(super::ErrorKind::UnresolvedType(UnresolvedType {
            ty: ty.into().into(),
            provider,
        }))
    }

    /// Returns `true` if this error is an unresolved type error.
    pub fn is_unresolved_type(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::UnresolvedType(_)))
    }
}
