use super::{Formatter, ToTs};
use crate::is_identifier;

/// A string literal, quoted and escaped with the serializer's quote style.
pub(super) struct StringLiteral<S>(pub(super) S);

/// An object key: bare when it is a valid identifier, quoted otherwise.
pub(super) struct PropertyName<S>(pub(super) S);

impl<S: AsRef<str>> ToTs for StringLiteral<S> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let quote = f.serializer.quote.as_char();

        f.dst.push(quote);
        for ch in self.0.as_ref().chars() {
            match ch {
                '\\' => f.dst.push_str("\\\\"),
                '\n' => f.dst.push_str("\\n"),
                '\r' => f.dst.push_str("\\r"),
                '\t' => f.dst.push_str("\\t"),
                ch if ch == quote => {
                    f.dst.push('\\');
                    f.dst.push(ch);
                }
                ch => f.dst.push(ch),
            }
        }
        f.dst.push(quote);
    }
}

impl<S: AsRef<str>> ToTs for PropertyName<S> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        if is_identifier(name) {
            f.dst.push_str(name);
        } else {
            StringLiteral(name).to_ts(f);
        }
    }
}
