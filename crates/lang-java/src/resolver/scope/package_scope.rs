use crate::resolver::context::ResolutionContext;
use crate::resolver::scope::TypeScope;

/// Types declared in the same package as the reference.
pub struct PackageScope;

impl TypeScope for PackageScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        let candidate = context.in_package(name);
        context.known.contains(&candidate).then_some(candidate)
    }

    fn name(&self) -> &'static str {
        "PackageScope"
    }
}
