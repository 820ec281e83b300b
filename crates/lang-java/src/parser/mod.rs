use crate::model::JavaFileModel;
use routegen_core::{Result, RouteGenError};
use std::path::Path;
use tree_sitter::Tree;

mod ast;
mod constants;
mod literals;

pub use literals::unescape_java_string;

/// Tree-sitter backed reader for the parts of a Java file the generator needs.
#[derive(Clone)]
pub struct JavaParser {
    pub language: tree_sitter::Language,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
        Ok(Self { language })
    }

    pub fn parse_tree(&self, source: &str) -> Result<Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| RouteGenError::Parsing(format!("Error loading Java grammar: {}", e)))?;
        parser
            .parse(source, None)
            .ok_or_else(|| RouteGenError::Parsing("Java parser produced no tree".to_string()))
    }

    pub fn parse_file(&self, source: &str, path: &Path) -> Result<JavaFileModel> {
        let tree = self.parse_tree(source)?;
        if tree.root_node().has_error() {
            tracing::debug!("Syntax errors in {}, extracting what parsed", path.display());
        }
        Ok(self.analyze(&tree, source, path))
    }
}
