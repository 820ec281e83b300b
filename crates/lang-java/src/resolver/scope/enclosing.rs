use crate::resolver::context::ResolutionContext;
use crate::resolver::scope::TypeScope;

/// Member types of the referencing type and of its outer types.
pub struct EnclosingScope;

impl TypeScope for EnclosingScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        context
            .enclosing_types
            .iter()
            .flat_map(|outer| {
                // the type itself when referenced by its own simple name
                let own = outer
                    .rsplit('.')
                    .next()
                    .filter(|simple| *simple == name)
                    .map(|_| outer.clone());
                own.into_iter().chain(Some(format!("{}.{}", outer, name)))
            })
            .find(|candidate| context.known.contains(candidate))
    }

    fn name(&self) -> &'static str {
        "Enclosing"
    }
}
