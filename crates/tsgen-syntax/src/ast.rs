mod expr;
pub use expr::Expr;

mod item;
pub use item::{ConstDecl, ImportType, Item, TypeAlias};

mod module;
pub use module::Module;

mod property;
pub use property::Property;

mod ty;
pub use ty::Type;
