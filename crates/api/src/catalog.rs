use crate::models::{TypeDeclaration, TypeId};

/// Read-only, whole-program view of declared types.
///
/// `declarations` yields types in catalog-walk order; every ordering rule of a
/// generation pass is defined relative to it.
pub trait TypeCatalog {
    fn declarations(&self) -> &[TypeDeclaration];

    fn get(&self, id: TypeId) -> Option<&TypeDeclaration> {
        self.declarations().iter().find(|d| d.id == id)
    }

    /// Re-resolve the fully qualified name of a declaration by identity.
    fn qualified_name(&self, id: TypeId) -> Option<String> {
        self.get(id).map(TypeDeclaration::qualified_name)
    }
}

/// Vector-backed catalog where identities are insertion indices.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    declarations: Vec<TypeDeclaration>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, assigning it the next identity.
    pub fn push(&mut self, mut declaration: TypeDeclaration) -> TypeId {
        let id = TypeId(self.declarations.len() as u32);
        declaration.id = id;
        self.declarations.push(declaration);
        id
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl TypeCatalog for InMemoryCatalog {
    fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    fn get(&self, id: TypeId) -> Option<&TypeDeclaration> {
        self.declarations.get(id.0 as usize)
    }
}

impl FromIterator<TypeDeclaration> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDeclaration>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for declaration in iter {
            catalog.push(declaration);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ids() {
        let catalog: InMemoryCatalog = vec![
            TypeDeclaration::class("AudiPage", "app.cars"),
            TypeDeclaration::class("VolvoPage", "app.cars"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.qualified_name(TypeId(1)).as_deref(),
            Some("app.cars.VolvoPage")
        );
        assert!(catalog.qualified_name(TypeId(2)).is_none());
    }
}
