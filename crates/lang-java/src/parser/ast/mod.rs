use super::JavaParser;
use super::constants::*;
use crate::model::{JavaFileModel, JavaImport};
use std::path::Path;
use tree_sitter::{Node, Tree};

mod annotations;
mod entities;

/// 1-based line of a node.
pub(super) fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

pub(super) fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

impl JavaParser {
    /// Walks a parsed tree and produces the file model.
    pub(crate) fn analyze(&self, tree: &Tree, source: &str, path: &Path) -> JavaFileModel {
        let root = tree.root_node();
        let mut package = None;
        let mut imports = Vec::new();
        let mut types = Vec::new();

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                KIND_PACKAGE_DECL => package = Self::package_name(child, source),
                KIND_IMPORT_DECL => {
                    if let Some(import) = Self::parse_import(node_text(child, source)) {
                        imports.push(import);
                    }
                }
                _ => self.collect_type(child, source, &[], &mut types),
            }
        }

        JavaFileModel {
            path: path.to_path_buf(),
            package,
            imports,
            types,
        }
    }

    fn package_name(node: Node, source: &str) -> Option<String> {
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), KIND_IDENTIFIER | KIND_SCOPED_IDENTIFIER))?;
        Some(node_text(name, source).to_string())
    }

    /// `import [static] a.b.C[.*];`
    pub(crate) fn parse_import(text: &str) -> Option<JavaImport> {
        let body = text.trim().strip_prefix("import")?.trim_end().strip_suffix(';')?;
        let body = body.trim();
        let (is_static, body) = match body.strip_prefix("static") {
            Some(rest) if rest.starts_with(char::is_whitespace) => (true, rest.trim()),
            _ => (false, body),
        };
        let path: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        let (path, is_wildcard) = match path.strip_suffix(".*") {
            Some(prefix) => (prefix.to_string(), true),
            None => (path, false),
        };
        if path.is_empty() {
            return None;
        }
        Some(JavaImport {
            path,
            is_static,
            is_wildcard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import_variants() {
        let single = JavaParser::parse_import("import a.b.C;").unwrap();
        assert_eq!(single.path, "a.b.C");
        assert!(!single.is_static && !single.is_wildcard);

        let spaced = JavaParser::parse_import("import  a . b . *  ;").unwrap();
        assert_eq!(spaced.path, "a.b");
        assert!(spaced.is_wildcard);

        let stat = JavaParser::parse_import("import static a.B.member;").unwrap();
        assert!(stat.is_static);
        assert_eq!(stat.path, "a.B.member");

        let named_static = JavaParser::parse_import("import staticpkg.Page;").unwrap();
        assert!(!named_static.is_static);
        assert_eq!(named_static.path, "staticpkg.Page");

        assert!(JavaParser::parse_import("import ;").is_none());
    }
}
