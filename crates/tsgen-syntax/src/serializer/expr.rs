use super::{Formatter, PropertyName, StringLiteral, ToTs};

use crate::ast::Expr;

/// `key: value` inside an object literal
struct Entry<'a>(&'a str, &'a Expr);

impl ToTs for &Expr {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Expr::String(value) => fmt!(f, StringLiteral(value)),
            Expr::Array(items) => f.block("[", "]", items, ",", false),
            Expr::Object(entries) => f.block(
                "{",
                "}",
                entries.iter().map(|(key, value)| Entry(key, value)),
                ",",
                false,
            ),
            Expr::AsConst(expr) => {
                let expr = expr.as_ref();
                fmt!(f, expr " as const");
            }
        }
    }
}

impl ToTs for Entry<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let Entry(key, value) = self;
        fmt!(f, PropertyName(key) ": " value);
    }
}
