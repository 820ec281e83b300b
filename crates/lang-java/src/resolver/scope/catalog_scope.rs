use crate::resolver::context::ResolutionContext;
use crate::resolver::scope::TypeScope;

/// Last resort: a simple name declared exactly once anywhere in the sources.
pub struct CatalogScope;

impl TypeScope for CatalogScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        context.known.unique(name).map(str::to_string)
    }

    fn name(&self) -> &'static str {
        "Catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::context::KnownTypes;

    #[test]
    fn test_ambiguous_simple_name_is_not_resolved() {
        let mut known = KnownTypes::new();
        known.insert("HomePage", "a.HomePage".into());
        known.insert("HomePage", "b.HomePage".into());
        known.insert("AboutPage", "b.AboutPage".into());
        let ctx = ResolutionContext::new(Some("c"), &[], &known);

        assert_eq!(CatalogScope.resolve("HomePage", &ctx), None);
        assert_eq!(
            CatalogScope.resolve("AboutPage", &ctx).as_deref(),
            Some("b.AboutPage")
        );
    }
}
