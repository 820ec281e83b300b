use crate::resolver::context::ResolutionContext;
use crate::resolver::scope::TypeScope;

/// Single-type imports (`import a.b.Name;`).
pub struct ImportScope;

impl TypeScope for ImportScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        context
            .imports
            .iter()
            .filter(|imp| !imp.is_static && !imp.is_wildcard)
            .find(|imp| imp.simple_name() == name)
            .map(|imp| imp.path.clone())
    }

    fn name(&self) -> &'static str {
        "Import"
    }
}

/// On-demand imports (`import a.b.*;`), limited to types known to exist.
pub struct WildcardImportScope;

impl TypeScope for WildcardImportScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        context
            .imports
            .iter()
            .filter(|imp| imp.is_wildcard)
            .map(|imp| format!("{}.{}", imp.path, name))
            .find(|candidate| context.known.contains(candidate))
    }

    fn name(&self) -> &'static str {
        "WildcardImport"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JavaImport;
    use crate::resolver::context::KnownTypes;

    fn import(path: &str, is_static: bool, is_wildcard: bool) -> JavaImport {
        JavaImport {
            path: path.to_string(),
            is_static,
            is_wildcard,
        }
    }

    #[test]
    fn test_import_scope_precise() {
        let imports = vec![
            import("java.util.List", false, false),
            import("com.example.Util.List", true, false),
        ];
        let known = KnownTypes::new();
        let ctx = ResolutionContext::new(Some("app"), &imports, &known);

        assert_eq!(
            ImportScope.resolve("List", &ctx).as_deref(),
            Some("java.util.List")
        );
        assert_eq!(ImportScope.resolve("Map", &ctx), None);
    }

    #[test]
    fn test_wildcard_requires_known_type() {
        let imports = vec![
            import("com.other", false, true),
            import("com.pages", false, true),
        ];
        let mut known = KnownTypes::new();
        known.insert("HomePage", "com.pages.HomePage".into());
        let ctx = ResolutionContext::new(None, &imports, &known);

        assert_eq!(
            WildcardImportScope.resolve("HomePage", &ctx).as_deref(),
            Some("com.pages.HomePage")
        );
        assert_eq!(WildcardImportScope.resolve("AboutPage", &ctx), None);
    }
}
