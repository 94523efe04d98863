use super::{Comma, Docs, Formatter, StringLiteral, ToTs};

use crate::ast::{ConstDecl, ImportType, Item, TypeAlias};

impl ToTs for &Item {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Item::ImportType(import) => import.to_ts(f),
            Item::TypeAlias(alias) => alias.to_ts(f),
            Item::Const(decl) => decl.to_ts(f),
        }
    }
}

impl ToTs for &ImportType {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let names = Comma(&self.names);
        let from = StringLiteral(&self.from);

        fmt!(f, "import type { " names " } from " from ";");
    }
}

impl ToTs for &TypeAlias {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if let Some(docs) = &self.docs {
            Docs(docs).to_ts(f);
        }

        let export = if self.exported { "export " } else { "" };
        let name = &self.name;
        fmt!(f, export "type " name);

        if !self.params.is_empty() {
            let params = Comma(&self.params);
            fmt!(f, "<" params ">");
        }

        let ty = &self.ty;
        fmt!(f, " = " ty ";");
    }
}

impl ToTs for &ConstDecl {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if let Some(docs) = &self.docs {
            Docs(docs).to_ts(f);
        }

        let export = if self.exported { "export " } else { "" };
        let name = &self.name;
        let init = &self.init;
        fmt!(f, export "const " name " = " init ";");
    }
}
