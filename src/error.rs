#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Browser error")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Unexpected page structure: {0}")]
    UnexpectedStructure(String),

    #[error("Io error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Json(#[from] serde_json::Error),
}
