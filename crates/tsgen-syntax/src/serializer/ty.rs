use super::{Comma, Docs, Formatter, Pipe, PropertyName, StringLiteral, ToTs};

use crate::ast::{Property, Type};

/// Operand of a postfix type operator, parenthesized when required.
struct Operand<'a>(&'a Type);

/// Member of a union, parenthesized when required.
struct Member<'a>(&'a Type);

impl ToTs for &Type {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Type::Reference { name, args } => {
                if args.is_empty() {
                    fmt!(f, name);
                } else {
                    let args = Comma(args);
                    fmt!(f, name "<" args ">");
                }
            }
            Type::Array(element) => {
                let element = Operand(element);
                fmt!(f, element "[]");
            }
            Type::Union(types) => fmt!(f, Pipe(types.iter().map(Member))),
            Type::StringLiteral(value) => fmt!(f, StringLiteral(value)),
            Type::Null => fmt!(f, "null"),
            Type::Object(properties) => f.block("{", "}", properties, ";", true),
            Type::TypeOf(name) => fmt!(f, "typeof " name),
            Type::KeyOf(ty) => {
                let ty = ty.as_ref();
                fmt!(f, "keyof " ty);
            }
            Type::IndexedAccess { object, index } => {
                let object = Operand(object);
                let index = index.as_ref();
                fmt!(f, object "[" index "]");
            }
            Type::Infer(name) => fmt!(f, "infer " name),
            Type::Conditional {
                check,
                extends,
                then,
                otherwise,
            } => {
                let check = check.as_ref();
                let extends = extends.as_ref();
                let then = then.as_ref();
                let otherwise = otherwise.as_ref();

                fmt!(f, check " extends " extends);

                f.depth += 1;
                f.newline();
                fmt!(f, "? " then);
                f.newline();
                fmt!(f, ": " otherwise);
                f.depth -= 1;
            }
            Type::Raw(src) => fmt!(f, src),
        }
    }
}

impl ToTs for Operand<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if self.0.needs_parens_as_operand() {
            fmt!(f, "(" self.0 ")");
        } else {
            self.0.to_ts(f);
        }
    }
}

impl ToTs for Member<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if self.0.needs_parens_in_union() {
            fmt!(f, "(" self.0 ")");
        } else {
            self.0.to_ts(f);
        }
    }
}

impl ToTs for &Property {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if let Some(docs) = &self.docs {
            Docs(docs).to_ts(f);
        }

        let name = PropertyName(&self.name);
        let ty = &self.ty;
        fmt!(f, name ": " ty);
    }
}
