use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Bad embedding argument; the message is shown to the user verbatim
    #[error("{0}")]
    Validation(String),

    /// The browser lacks a capability the viewer needs
    #[error("{0}")]
    Environment(String),

    #[error("Failed to load required library: {0}")]
    DependencyLoad(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Error connecting to backend: {0}")]
    Transport(String),

    #[error("Application Error: {}", .0.as_deref().unwrap_or("no more info available. check logs."))]
    Application(Option<String>),

    #[error("{0}")]
    NoResults(String),

    #[error("{0}")]
    EmptyReply(String),

    #[error("Data set '{0}' does not have any planes associated with it!")]
    NoPlanes(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ViewerError {
    fn from(e: serde_json::Error) -> Self {
        ViewerError::Serialization(e.to_string())
    }
}
