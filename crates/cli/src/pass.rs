use anyhow::Context;
use routegen_api::{Diagnostic, MemoryOutput, TypeCatalog, TypeId};
use routegen_core::markers::MarkerReader;
use routegen_core::walker::CatalogWalker;
use routegen_core::{GenerationOutcome, RouteGenConfig};
use routegen_java::{JavaProject, JavaTypeCatalog, generate_routes};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// One generation pass over a project directory, kept in memory.
pub struct ProjectPass {
    pub root: PathBuf,
    pub config: RouteGenConfig,
    pub catalog: JavaTypeCatalog,
    pub outcome: GenerationOutcome,
    pub diagnostics: Vec<Diagnostic>,
    pub output: MemoryOutput,
}

impl ProjectPass {
    pub fn execute(root: &Path, config_file: Option<&Path>) -> anyhow::Result<Self> {
        let config = match config_file {
            Some(file) => RouteGenConfig::load(file)
                .with_context(|| format!("failed to load {}", file.display()))?,
            None => RouteGenConfig::load_from_project(root)
                .with_context(|| format!("failed to load configuration in {}", root.display()))?,
        };

        let project = JavaProject::scan(root, &config)
            .with_context(|| format!("failed to scan {}", root.display()))?;
        tracing::info!(
            "Scanned {} Java files in {}",
            project.files().len(),
            root.display()
        );
        let catalog = project.catalog();

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut output = MemoryOutput::new();
        let outcome = generate_routes(
            &catalog,
            &config,
            CancellationToken::new(),
            &mut diagnostics,
            &mut output,
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            catalog,
            outcome,
            diagnostics,
            output,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// The type carrying the configuration marker, also when the pass did not generate.
    pub fn carrier(&self) -> Option<TypeId> {
        if let Some(generated) = self.outcome.generated() {
            return Some(generated.carrier);
        }
        let reader = MarkerReader::new(&self.config.markers);
        CatalogWalker::new(&self.catalog)
            .all()
            .find_map(|decl| reader.configuration(decl))
            .map(|config| config.carrier)
    }

    /// Directory of the configuration carrier's source file, under the root.
    pub fn carrier_dir(&self) -> Option<PathBuf> {
        let origin = self.catalog.get(self.carrier()?)?.origin.as_ref()?;
        let parent = origin.path.parent().unwrap_or_else(|| Path::new(""));
        Some(self.root.join(parent))
    }

    /// `--out`, then the configured output directory, then the carrier's directory.
    pub fn output_dir(&self, out: Option<&Path>) -> PathBuf {
        if let Some(out) = out {
            return out.to_path_buf();
        }
        if let Some(dir) = &self.config.output_dir {
            return self.root.join(dir);
        }
        self.carrier_dir().unwrap_or_else(|| self.root.clone())
    }
}
