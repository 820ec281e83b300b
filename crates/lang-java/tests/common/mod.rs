use routegen_api::{Diagnostic, MemoryOutput};
use routegen_core::{GenerationOutcome, RouteGenConfig};
use routegen_java::{JavaProject, generate_routes};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

pub struct Pass {
    pub outcome: GenerationOutcome,
    pub diagnostics: Vec<Diagnostic>,
    pub output: MemoryOutput,
}

impl Pass {
    pub fn routes(&self) -> Vec<String> {
        self.outcome
            .generated()
            .map(|g| g.table.all_routes().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn type_of(&self, route: &str) -> Option<String> {
        self.outcome
            .generated()
            .and_then(|g| g.table.type_of(route))
            .map(str::to_string)
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(|d| d.id()).collect()
    }

    pub fn text(&self) -> Option<&str> {
        self.output.get("Routes.g.java")
    }
}

pub fn write_sources(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (relative, source) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source dir");
        }
        fs::write(&path, source).expect("write source");
    }
    dir
}

pub fn run_in(root: &Path, config: &RouteGenConfig) -> Pass {
    let project = JavaProject::scan(root, config).expect("scan project");
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut output = MemoryOutput::new();
    let outcome = generate_routes(
        &project.catalog(),
        config,
        CancellationToken::new(),
        &mut diagnostics,
        &mut output,
    );
    Pass {
        outcome,
        diagnostics,
        output,
    }
}

pub fn run(files: &[(&str, &str)]) -> Pass {
    let dir = write_sources(files);
    run_in(dir.path(), &RouteGenConfig::default())
}
