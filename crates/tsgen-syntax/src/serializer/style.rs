use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Quote {
    Double,
    Single,
}

impl Quote {
    pub(super) fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

impl Serializer {
    /// Double quoted strings, four space indentation
    pub fn new() -> Serializer {
        Serializer {
            quote: Quote::Double,
            indent: 4,
        }
    }

    /// Use single quotes for string literals and quoted keys
    pub fn single_quotes(mut self) -> Serializer {
        self.quote = Quote::Single;
        self
    }

    /// Set the number of spaces per indentation level
    pub fn indent(mut self, width: usize) -> Serializer {
        self.indent = width;
        self
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::new()
    }
}
