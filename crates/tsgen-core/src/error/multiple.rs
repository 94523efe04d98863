use super::Error;

/// Several independent errors reported together, e.g. one per failing model
/// in a batch.
#[derive(Debug)]
pub(super) struct MultipleErrors {
    errors: Vec<Error>,
}

impl MultipleErrors {
    pub(super) fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }
}

impl std::error::Error for MultipleErrors {}

impl core::fmt::Display for MultipleErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} errors: ", self.errors.len())?;

        let mut s = "";
        for err in &self.errors {
            write!(f, "{s}{err}")?;
            s = "; ";
        }

        Ok(())
    }
}

impl Error {
    /// Aggregates `errors` into a single error.
    ///
    /// A single error is returned as is.
    pub fn multiple(mut errors: Vec<Error>) -> Error {
        if errors.len() == 1 {
            if let Some(err) = errors.pop() {
                return err;
            }
        }

        Error::from(super::ErrorKind::Multiple(MultipleErrors { errors }))
    }
}
