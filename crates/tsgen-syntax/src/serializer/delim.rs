use super::{Formatter, ToTs};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// `|` delimited, for union members
pub(super) struct Pipe<L>(pub(super) L);

impl<L> ToTs for Comma<L>
where
    L: IntoIterator,
    L::Item: ToTs,
{
    fn to_ts(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl<L> ToTs for Pipe<L>
where
    L: IntoIterator,
    L::Item: ToTs,
{
    fn to_ts(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = " | ";
        }
    }
}
