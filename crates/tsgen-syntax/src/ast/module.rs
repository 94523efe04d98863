use super::Item;

/// A generated source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    /// Finds a declaration by name. Type aliases and constants may share a
    /// name, so `is_type` selects which one.
    pub fn find(&self, name: &str, is_type: bool) -> Option<&Item> {
        self.items.iter().find(|item| {
            item.name() == Some(name) && matches!(item, Item::TypeAlias(_)) == is_type
        })
    }
}

impl Extend<Item> for Module {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}
