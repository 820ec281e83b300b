use routegen_api::{TypeCatalog, TypeDeclaration};

/// Walks a catalog in its canonical order.
pub struct CatalogWalker<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl<'a> CatalogWalker<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Every declaration, any kind. Markers may sit on any of them.
    pub fn all(&self) -> impl Iterator<Item = &'a TypeDeclaration> + use<'a> {
        self.catalog.declarations().iter()
    }

    /// Declarations that can stand as route targets.
    pub fn class_likes(&self) -> impl Iterator<Item = &'a TypeDeclaration> + use<'a> {
        self.all().filter(|d| d.kind.is_class_like())
    }

    /// First class-like declaration with the given simple name.
    pub fn find_by_simple_name(&self, name: &str) -> Option<&'a TypeDeclaration> {
        self.class_likes().find(|d| d.name == name)
    }
}
