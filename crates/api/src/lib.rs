pub mod catalog;
pub mod error;
pub mod models;
pub mod sink;

// Re-export commonly used types
pub use catalog::{InMemoryCatalog, TypeCatalog};
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use sink::{DiagnosticSink, GeneratedFile, MemoryOutput, OutputSink};
