pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod generator;
pub mod logging;
pub mod markers;
pub mod table;
pub mod validate;
pub mod walker;

pub use config::{MarkerNames, RouteGenConfig};
pub use emit::SourceEmitter;
pub use error::{Result, RouteGenError};
pub use generator::{GeneratedRoutes, GenerationOutcome, RouteGenerator};
pub use table::RouteTable;
