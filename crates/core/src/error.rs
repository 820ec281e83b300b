use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unresolved type: {0}")]
    Unresolved(String),
    #[error("Emit error: {0}")]
    Emit(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RouteGenError {
    /// Short category name, surfaced in fault diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            RouteGenError::Io(_) => "Io",
            RouteGenError::Json(_) => "Json",
            RouteGenError::Parsing(_) => "Parsing",
            RouteGenError::Config(_) => "Config",
            RouteGenError::Unresolved(_) => "Unresolved",
            RouteGenError::Emit(_) => "Emit",
            RouteGenError::Internal(_) => "Internal",
        }
    }
}

impl From<routegen_api::ApiError> for RouteGenError {
    fn from(err: routegen_api::ApiError) -> Self {
        match err {
            routegen_api::ApiError::Io(e) => RouteGenError::Io(e),
            other => RouteGenError::Emit(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteGenError>;
