use crate::error::{ApiError, ApiResult};
use crate::models::Diagnostic;

/// Receives diagnostics produced during a pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Receives generated source files.
pub trait OutputSink {
    fn add_source(&mut self, file_id: &str, text: String) -> ApiResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_id: String,
    pub text: String,
}

/// Keeps generated files in memory. Adding the same id twice is rejected.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    pub files: Vec<GeneratedFile>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_id: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.file_id == file_id)
            .map(|f| f.text.as_str())
    }
}

impl OutputSink for MemoryOutput {
    fn add_source(&mut self, file_id: &str, text: String) -> ApiResult<()> {
        if self.get(file_id).is_some() {
            return Err(ApiError::InvalidArgument(format!(
                "source '{}' was already added",
                file_id
            )));
        }
        self.files.push(GeneratedFile {
            file_id: file_id.to_string(),
            text,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output_rejects_duplicate_ids() {
        let mut output = MemoryOutput::new();
        output.add_source("Routes.g.java", "a".into()).unwrap();
        let err = output.add_source("Routes.g.java", "b".into()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert_eq!(output.get("Routes.g.java"), Some("a"));
    }
}
