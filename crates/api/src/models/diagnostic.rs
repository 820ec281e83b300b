use super::location::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Stable diagnostic identifiers. The ids are part of the public contract.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Configuration suffix missing or blank.
    #[serde(rename = "ARG001")]
    MissingSuffix,
    /// Extra route name fails the identifier grammar.
    #[serde(rename = "EXR001")]
    InvalidRouteName,
    /// Extra route name duplicates an existing route.
    #[serde(rename = "EXR002")]
    DuplicateRoute,
    /// Extra route accepted without a resolved type.
    #[serde(rename = "EXR003")]
    UnresolvedRouteType,
    /// Unexpected internal fault, generation degraded.
    #[serde(rename = "RGE001")]
    GenerationFault,
}

impl DiagnosticCode {
    pub const fn id(self) -> &'static str {
        match self {
            DiagnosticCode::MissingSuffix => "ARG001",
            DiagnosticCode::InvalidRouteName => "EXR001",
            DiagnosticCode::DuplicateRoute => "EXR002",
            DiagnosticCode::UnresolvedRouteType => "EXR003",
            DiagnosticCode::GenerationFault => "RGE001",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticCode::MissingSuffix => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn id(&self) -> &'static str {
        self.code.id()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " --> {}", location)?;
        }
        Ok(())
    }
}
