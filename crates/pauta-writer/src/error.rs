use thiserror::Error;

/// Message shown to the reporter whenever generation fails.
pub const GENERATION_FAILURE_MESSAGE: &str = "Falha ao gerar notícia. Verifique sua chave de API.";

/// What went wrong inside a single generation call. Logged, never shown.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("credential not set in environment variable {0}")]
    MissingCredential(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to model endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The only failure surfaced to callers of the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", GENERATION_FAILURE_MESSAGE)]
pub struct GenerationFailure;

impl From<EngineError> for GenerationFailure {
    fn from(_: EngineError) -> Self {
        GenerationFailure
    }
}
