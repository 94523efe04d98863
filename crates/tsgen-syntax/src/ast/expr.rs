/// Value expression, as found on the right-hand side of a `const`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `"value"`
    String(String),

    /// `[a, b, c]`
    Array(Vec<Expr>),

    /// `{ key: value, ... }`
    Object(Vec<(String, Expr)>),

    /// `<expr> as const`
    AsConst(Box<Expr>),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn array(items: impl IntoIterator<Item = Expr>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Expr)>) -> Self {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Wraps the expression in `as const`, so literal types are preserved
    /// instead of being widened.
    pub fn as_const(self) -> Self {
        Self::AsConst(Box::new(self))
    }
}
