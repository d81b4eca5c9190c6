use thiserror::Error;

/// Errors emitted while loading the frontend config or deriving endpoints.
#[derive(Debug, Error)]
pub(crate) enum BootstrapError {
    #[error("frontend config IO failed")]
    Io(#[from] std::io::Error),
    #[error("frontend config JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("invalid base url")]
    Url(#[from] url::ParseError),
}
