use tsgen_core::Error;

/// Collects independent errors so they can be reported together.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: vec![] }
    }

    pub(crate) fn push(&mut self, err: Error) {
        self.errors.push(err);
    }

    pub(crate) fn collect(self) -> Option<Error> {
        if self.errors.is_empty() {
            None
        } else {
            Some(Error::multiple(self.errors))
        }
    }
}
