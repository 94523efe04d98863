#[macro_use]
mod fmt;
use fmt::ToTs;

mod delim;
use delim::{Comma, Pipe};

mod docs;
use docs::Docs;

mod ident;
use ident::{PropertyName, StringLiteral};

mod style;
use style::Quote;

// Fragment serializers
mod expr;
mod item;
mod ty;

use crate::ast::{Item, Module, Type};

/// Serialize an AST to TypeScript source
#[derive(Debug, Clone)]
pub struct Serializer {
    /// Quote character used for string literals and quoted keys
    quote: Quote,

    /// Number of spaces per indentation level
    indent: usize,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized source
    dst: &'a mut String,

    /// Current indentation level
    depth: usize,
}

impl Serializer {
    /// Serialize a full module. Items are separated by a blank line and the
    /// output ends with a newline.
    pub fn serialize(&self, module: &Module) -> String {
        let mut ret = String::new();

        for (i, item) in module.items.iter().enumerate() {
            if i > 0 {
                ret.push_str("\n\n");
            }

            self.write(&mut ret, |f| item.to_ts(f));
        }

        if !ret.is_empty() {
            ret.push('\n');
        }

        ret
    }

    /// Serialize a single item, without a trailing newline
    pub fn serialize_item(&self, item: &Item) -> String {
        let mut ret = String::new();
        self.write(&mut ret, |f| item.to_ts(f));
        ret
    }

    /// Serialize a type expression
    pub fn serialize_type(&self, ty: &Type) -> String {
        let mut ret = String::new();
        self.write(&mut ret, |f| ty.to_ts(f));
        ret
    }

    fn write(&self, dst: &mut String, body: impl FnOnce(&mut Formatter<'_>)) {
        let mut fmt = Formatter {
            serializer: self,
            dst,
            depth: 0,
        };

        body(&mut fmt);
    }
}

impl Formatter<'_> {
    /// Starts a new line at the current indentation level.
    fn newline(&mut self) {
        self.dst.push('\n');

        for _ in 0..self.depth * self.serializer.indent {
            self.dst.push(' ');
        }
    }

    /// Writes `items` one per line between `open` and `close`, one level
    /// deeper than the surrounding code. Empty lists collapse to
    /// `open` + `close`. With `terminate`, the last item is followed by
    /// `sep` too.
    fn block<I>(&mut self, open: &str, close: &str, items: I, sep: &str, terminate: bool)
    where
        I: IntoIterator,
        I::Item: ToTs,
    {
        self.dst.push_str(open);

        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            self.dst.push_str(close);
            return;
        }

        self.depth += 1;
        while let Some(item) = items.next() {
            self.newline();
            item.to_ts(self);

            if terminate || items.peek().is_some() {
                self.dst.push_str(sep);
            }
        }
        self.depth -= 1;

        self.newline();
        self.dst.push_str(close);
    }
}
