pub mod catalog;
pub mod emitter;
pub mod model;
pub mod parser;
pub mod project;
pub mod resolver;

pub use catalog::JavaTypeCatalog;
pub use emitter::JavaRoutesEmitter;
pub use parser::JavaParser;
pub use project::JavaProject;

use routegen_api::{DiagnosticSink, OutputSink};
use routegen_core::{GenerationOutcome, RouteGenConfig, RouteGenerator};
use tokio_util::sync::CancellationToken;

/// Runs one generation pass over a Java catalog with the Java emitter.
pub fn generate_routes(
    catalog: &JavaTypeCatalog,
    config: &RouteGenConfig,
    cancel: CancellationToken,
    diagnostics: &mut dyn DiagnosticSink,
    output: &mut dyn OutputSink,
) -> GenerationOutcome {
    let emitter = JavaRoutesEmitter::new();
    RouteGenerator::new(&emitter)
        .with_markers(config.markers.clone())
        .with_cancellation(cancel)
        .run(catalog, diagnostics, output)
}
