use crate::catalog::JavaTypeCatalog;
use crate::model::JavaFileModel;
use crate::parser::JavaParser;
use ignore::WalkBuilder;
use rayon::prelude::*;
use routegen_core::{Result, RouteGenConfig, RouteGenError};
use std::fs;
use std::path::{Path, PathBuf};

pub fn is_java_source(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext == "java")
}

/// Output of an earlier pass, e.g. `Routes.g.java`.
pub fn is_generated_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(".g.java"))
}

/// Parsed Java sources of one project, paths relative to its root.
pub struct JavaProject {
    /// Sorted by path.
    files: Vec<JavaFileModel>,
}

impl JavaProject {
    /// Walks `root` honoring ignore files and the configured excludes, then
    /// parses every `.java` file in parallel.
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    pub fn scan(root: &Path, config: &RouteGenConfig) -> Result<Self> {
        if !root.is_dir() {
            return Err(RouteGenError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("project root {} is not a directory", root.display()),
            )));
        }

        let paths = Self::collect_paths(root, config);
        tracing::debug!("Found {} Java files under {}", paths.len(), root.display());

        let parser = JavaParser::new()?;
        let mut files: Vec<JavaFileModel> = paths
            .par_iter()
            .filter_map(|relative| {
                let source = match fs::read_to_string(root.join(relative)) {
                    Ok(source) => source,
                    Err(e) => {
                        tracing::warn!("Skipping {}: {}", relative.display(), e);
                        return None;
                    }
                };
                match parser.parse_file(&source, relative) {
                    Ok(model) => Some(model),
                    Err(e) => {
                        tracing::warn!("Skipping {}: {}", relative.display(), e);
                        None
                    }
                }
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Self { files })
    }

    /// Paths relative to `root`.
    pub(crate) fn collect_paths(root: &Path, config: &RouteGenConfig) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .build()
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if !path.is_file() || !is_java_source(path) || is_generated_source(path) {
                    return None;
                }
                let relative = path.strip_prefix(root).ok()?.to_path_buf();
                if config.is_excluded(&relative) {
                    tracing::debug!("Excluded {}", relative.display());
                    return None;
                }
                Some(relative)
            })
            .collect()
    }

    pub fn files(&self) -> &[JavaFileModel] {
        &self.files
    }

    pub fn catalog(&self) -> JavaTypeCatalog {
        JavaTypeCatalog::from_models(&self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_sorts_and_skips_excluded() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/b")).unwrap();
        fs::create_dir_all(root.join("src/a")).unwrap();
        fs::create_dir_all(root.join("build/gen")).unwrap();
        fs::write(root.join("src/b/VolvoPage.java"), "package b; class VolvoPage {}").unwrap();
        fs::write(root.join("src/a/AudiPage.java"), "package a; class AudiPage {}").unwrap();
        fs::write(root.join("build/gen/Old.java"), "class Old {}").unwrap();
        fs::write(root.join("src/a/notes.txt"), "not java").unwrap();
        fs::write(root.join("src/a/Routes.g.java"), "class Routes {}").unwrap();

        let config = RouteGenConfig {
            exclude: vec![PathBuf::from("build")],
            ..Default::default()
        };
        let project = JavaProject::scan(root, &config).unwrap();
        let paths: Vec<_> = project.files().iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("src/a/AudiPage.java"),
                PathBuf::from("src/b/VolvoPage.java"),
            ]
        );
        assert_eq!(project.catalog().len(), 2);
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(JavaProject::scan(&missing, &RouteGenConfig::default()).is_err());
    }
}
