use routegen_api::TypeKind;
use std::path::PathBuf;

/// Syntactic model of one Java compilation unit, before name resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaFileModel {
    pub path: PathBuf,
    pub package: Option<String>,
    pub imports: Vec<JavaImport>,
    /// Declared types in pre-order: outer types before their nested types.
    pub types: Vec<JavaTypeEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaImport {
    /// Dotted path without the trailing `.*`.
    pub path: String,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl JavaImport {
    /// Last path segment, the simple name a single-type import brings in.
    pub fn simple_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JavaTypeEntity {
    pub name: String,
    pub enclosing: Vec<String>,
    pub kind: TypeKind,
    pub is_abstract: bool,
    pub annotations: Vec<JavaAnnotation>,
    /// 1-based line of the declaration.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JavaAnnotation {
    /// Name as written, possibly qualified.
    pub name: String,
    pub args: Vec<JavaAnnotationArg>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JavaAnnotationArg {
    pub key: Option<String>,
    pub value: JavaElementValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaElementValue {
    Str(String),
    /// Type written in a class literal, e.g. `Foo` for `Foo.class`.
    ClassLiteral(String),
    Null,
    Other(String),
}
