use crate::resolver::context::ResolutionContext;
use crate::resolver::scope::TypeScope;

const PRIMITIVES: &[&str] = &[
    "int", "long", "short", "byte", "float", "double", "boolean", "char", "void",
];

/// Commonly referenced members of the implicitly imported `java.lang`.
const JAVA_LANG_CLASSES: &[&str] = &[
    "String",
    "Object",
    "Integer",
    "Long",
    "Double",
    "Float",
    "Boolean",
    "Byte",
    "Character",
    "Short",
    "Void",
    "Number",
    "Math",
    "Exception",
    "RuntimeException",
    "Throwable",
    "Error",
    "Thread",
    "System",
    "Class",
    "Enum",
    "Record",
    "Iterable",
    "Runnable",
    "Comparable",
    "CharSequence",
    "StringBuilder",
];

/// Primitive types and `java.lang`.
pub struct BuiltinScope;

impl TypeScope for BuiltinScope {
    fn resolve(&self, name: &str, _context: &ResolutionContext) -> Option<String> {
        if PRIMITIVES.contains(&name) {
            return Some(name.to_string());
        }
        JAVA_LANG_CLASSES
            .contains(&name)
            .then(|| format!("java.lang.{}", name))
    }

    fn name(&self) -> &'static str {
        "Builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::context::KnownTypes;

    #[test]
    fn test_builtin_scope_java_lang() {
        let known = KnownTypes::new();
        let ctx = ResolutionContext::new(Some("app"), &[], &known);
        assert_eq!(
            BuiltinScope.resolve("String", &ctx).as_deref(),
            Some("java.lang.String")
        );
        assert_eq!(BuiltinScope.resolve("void", &ctx).as_deref(), Some("void"));
        assert_eq!(BuiltinScope.resolve("HomePage", &ctx), None);
    }
}
