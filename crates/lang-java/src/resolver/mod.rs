pub mod context;
pub mod scope;

use context::ResolutionContext;
use scope::{
    BuiltinScope, CatalogScope, EnclosingScope, ImportScope, PackageScope, TypeScope,
    WildcardImportScope,
};

/// Resolves type names written in class literals to qualified names.
pub struct JavaTypeResolver {
    scopes: Vec<Box<dyn TypeScope + Send + Sync>>,
}

impl Default for JavaTypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaTypeResolver {
    pub fn new() -> Self {
        Self {
            scopes: vec![
                Box::new(EnclosingScope),
                Box::new(ImportScope),
                Box::new(PackageScope),
                Box::new(WildcardImportScope),
                Box::new(BuiltinScope),
                Box::new(CatalogScope),
            ],
        }
    }

    /// Qualified name for `written`, falling back to the text as written.
    pub fn resolve(&self, written: &str, context: &ResolutionContext) -> String {
        self.try_resolve(written, context)
            .unwrap_or_else(|| written.to_string())
    }

    pub fn try_resolve(&self, written: &str, context: &ResolutionContext) -> Option<String> {
        if written.is_empty() {
            return None;
        }
        if context.known.contains(written) {
            return Some(written.to_string());
        }
        if let Some((head, tail)) = written.split_once('.') {
            // `Outer.Inner` where `Outer` is itself resolvable
            return self
                .resolve_simple(head, context)
                .map(|outer| format!("{}.{}", outer, tail))
                .filter(|candidate| context.known.contains(candidate));
        }
        self.resolve_simple(written, context)
    }

    fn resolve_simple(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        self.scopes.iter().find_map(|scope| {
            let resolved = scope.resolve(name, context)?;
            tracing::trace!("{} resolved via {} -> {}", name, scope.name(), resolved);
            Some(resolved)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JavaImport;
    use context::KnownTypes;

    fn known() -> KnownTypes {
        let mut known = KnownTypes::new();
        known.insert("HomePage", "app.pages.HomePage".into());
        known.insert("Shell", "app.Shell".into());
        known.insert("Detail", "app.Shell.Detail".into());
        known.insert("Settings", "app.settings.Settings".into());
        known
    }

    #[test]
    fn test_resolution_order() {
        let known = known();
        let imports = vec![JavaImport {
            path: "app.pages.HomePage".into(),
            is_static: false,
            is_wildcard: false,
        }];
        let ctx = ResolutionContext::new(Some("app"), &imports, &known);
        let resolver = JavaTypeResolver::new();

        assert_eq!(resolver.resolve("HomePage", &ctx), "app.pages.HomePage");
        assert_eq!(resolver.resolve("Shell.Detail", &ctx), "app.Shell.Detail");
        assert_eq!(resolver.resolve("app.Shell", &ctx), "app.Shell");
        assert_eq!(resolver.resolve("Settings", &ctx), "app.settings.Settings");
        assert_eq!(resolver.resolve("String", &ctx), "java.lang.String");
        assert_eq!(resolver.resolve("Nowhere", &ctx), "Nowhere");
        assert_eq!(
            resolver.resolve("org.lib.External", &ctx),
            "org.lib.External"
        );
    }

    #[test]
    fn test_single_import_beats_same_package() {
        let mut known = known();
        known.insert("HomePage", "app.HomePage".into());
        let imports = vec![JavaImport {
            path: "app.pages.HomePage".into(),
            is_static: false,
            is_wildcard: false,
        }];
        let ctx = ResolutionContext::new(Some("app"), &imports, &known);
        assert_eq!(
            JavaTypeResolver::new().resolve("HomePage", &ctx),
            "app.pages.HomePage"
        );
    }
}
