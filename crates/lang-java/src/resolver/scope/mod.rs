use super::context::ResolutionContext;

/// One step of the name lookup chain.
pub trait TypeScope {
    /// Qualified name for `name`, or `None` to defer to the next scope.
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String>;
    fn name(&self) -> &'static str;
}

pub mod builtin;
pub mod catalog_scope;
pub mod enclosing;
pub mod import_scope;
pub mod package_scope;

pub use builtin::BuiltinScope;
pub use catalog_scope::CatalogScope;
pub use enclosing::EnclosingScope;
pub use import_scope::{ImportScope, WildcardImportScope};
pub use package_scope::PackageScope;
