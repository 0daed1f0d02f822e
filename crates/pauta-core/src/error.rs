use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erro: API Key não configurada no ambiente ({0}).")]
    MissingCredential(String),
}

/// Rejections raised before a report is handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha o Local e o Relato.")]
    IncompleteGeneralReport,
}
