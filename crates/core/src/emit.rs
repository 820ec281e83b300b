use crate::error::Result;
use crate::table::RouteTable;

/// Base name of the generated unit.
pub const ROUTES_UNIT: &str = "Routes";

/// Renders a route table as source text in some target language.
///
/// Rendering must be pure: identical inputs give byte-identical output.
pub trait SourceEmitter {
    /// Extension of the generated file, without the dot.
    fn file_extension(&self) -> &str;

    /// Names that cannot be used as route constants in the target language.
    fn reserved_words(&self) -> &[&str] {
        &[]
    }

    fn render(&self, namespace: &str, table: &RouteTable) -> Result<String>;
}

/// `Routes.g.<ext>`
pub fn routes_file_id(emitter: &dyn SourceEmitter) -> String {
    format!("{}.g.{}", ROUTES_UNIT, emitter.file_extension())
}
