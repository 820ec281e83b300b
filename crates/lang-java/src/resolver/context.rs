use crate::model::JavaImport;
use std::collections::{HashMap, HashSet};

/// Qualified names of every type declared in the scanned sources.
#[derive(Debug, Default, Clone)]
pub struct KnownTypes {
    qualified: HashSet<String>,
    by_simple_name: HashMap<String, Vec<String>>,
}

impl KnownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, simple_name: &str, qualified: String) {
        if self.qualified.insert(qualified.clone()) {
            self.by_simple_name
                .entry(simple_name.to_string())
                .or_default()
                .push(qualified);
        }
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.qualified.contains(qualified)
    }

    /// The single declared type with this simple name, if exactly one exists.
    pub fn unique(&self, simple_name: &str) -> Option<&str> {
        match self.by_simple_name.get(simple_name).map(Vec::as_slice) {
            Some([only]) => Some(only.as_str()),
            _ => None,
        }
    }
}

/// Where a type name is written: the file's package and imports, and the
/// declaration carrying the reference.
pub struct ResolutionContext<'a> {
    pub package: Option<&'a str>,
    pub imports: &'a [JavaImport],
    /// Qualified names of the referencing type and its outer types, innermost first.
    pub enclosing_types: Vec<String>,
    pub known: &'a KnownTypes,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(package: Option<&'a str>, imports: &'a [JavaImport], known: &'a KnownTypes) -> Self {
        Self {
            package,
            imports,
            enclosing_types: Vec::new(),
            known,
        }
    }

    pub fn with_enclosing_types(mut self, enclosing_types: Vec<String>) -> Self {
        self.enclosing_types = enclosing_types;
        self
    }

    /// `package.name`, or `name` in the default package.
    pub fn in_package(&self, name: &str) -> String {
        match self.package {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, name),
            _ => name.to_string(),
        }
    }
}
