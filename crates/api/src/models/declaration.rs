use super::location::SourceLocation;
use super::marker::Marker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a declaration within one catalog snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Record,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    /// Classes and records can be instantiated as navigation targets.
    pub fn is_class_like(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Record)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Record => "record",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Annotation => "annotation",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared type as seen by the host, immutable for the duration of a pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub id: TypeId,
    pub name: String,
    /// Dotted namespace (package). Empty for the default namespace.
    pub namespace: String,
    /// Simple names of the enclosing types, outermost first.
    pub enclosing: Vec<String>,
    pub kind: TypeKind,
    pub is_abstract: bool,
    pub markers: Vec<Marker>,
    pub origin: Option<SourceLocation>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            id: TypeId(0),
            name: name.into(),
            namespace: namespace.into(),
            enclosing: Vec::new(),
            kind,
            is_abstract: false,
            markers: Vec::new(),
            origin: None,
        }
    }

    pub fn class(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, TypeKind::Class)
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_enclosing(mut self, enclosing: Vec<String>) -> Self {
        self.enclosing = enclosing;
        self
    }

    pub fn with_origin(mut self, origin: SourceLocation) -> Self {
        self.origin = Some(origin);
        self
    }

    /// `namespace.Outer.Name`, or just `Outer.Name` in the default namespace.
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.enclosing.len() + 2);
        if !self.namespace.is_empty() {
            parts.push(&self.namespace);
        }
        parts.extend(self.enclosing.iter().map(String::as_str));
        parts.push(&self.name);
        parts.join(".")
    }

    /// Markers whose simple name is one of `names`, in declaration order.
    pub fn markers_named<'a>(&'a self, names: &'a [String]) -> impl Iterator<Item = &'a Marker> {
        self.markers
            .iter()
            .filter(move |m| names.iter().any(|n| n == m.simple_name()))
    }

    pub fn has_marker(&self, names: &[String]) -> bool {
        self.markers_named(names).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_joins_namespace_and_enclosing() {
        let decl = TypeDeclaration::class("DetailPage", "com.example.cars")
            .with_enclosing(vec!["Screens".to_string()]);
        assert_eq!(decl.qualified_name(), "com.example.cars.Screens.DetailPage");
    }

    #[test]
    fn test_qualified_name_in_default_namespace() {
        let decl = TypeDeclaration::class("HomePage", "");
        assert_eq!(decl.qualified_name(), "HomePage");
    }

    #[test]
    fn test_markers_named_matches_simple_name() {
        let decl = TypeDeclaration::class("HomePage", "app")
            .with_marker(Marker::new("com.routes.IgnoreRoute"))
            .with_marker(Marker::new("Deprecated"));
        let names = vec!["IgnoreRoute".to_string()];
        assert!(decl.has_marker(&names));
        assert_eq!(decl.markers_named(&names).count(), 1);
    }
}
