//! pauta-writer
//!
//! Turns a newsroom incident report into a website article and a social
//! caption with one call to a generative model.

pub mod engine;
pub mod error;
pub mod parse;
pub mod prompt;

use tracing::{error, info};

use pauta_core::{AiSettings, GeneratedArticle, ReportInput};

pub use engine::{GeminiClient, Generator, InlineData, Part};
pub use error::{EngineError, GenerationFailure, GENERATION_FAILURE_MESSAGE};

/// Generate an article with the Gemini endpoint described by `settings`.
///
/// The credential is read from the environment during the call. Any failure
/// is logged and reported as a single [`GenerationFailure`].
pub async fn generate_article(
    input: &ReportInput,
    settings: &AiSettings,
) -> Result<GeneratedArticle, GenerationFailure> {
    let client = GeminiClient::new(settings).map_err(|e| {
        error!(error = %e, "could not set up model client");
        GenerationFailure
    })?;
    info!(model = %client.model(), category = %input.category(), "dispatching to Gemini");
    generate_article_with(&client, input).await
}

/// Generate an article with any [`Generator`]. One attempt, no retry.
pub async fn generate_article_with<G>(
    generator: &G,
    input: &ReportInput,
) -> Result<GeneratedArticle, GenerationFailure>
where
    G: Generator + ?Sized,
{
    let parts = engine::assemble_parts(prompt::build(input), &input.images);

    info!(
        category = %input.category(),
        images = parts.len() - 1,
        "requesting article"
    );

    match generator.generate(&parts).await {
        Ok(raw) => {
            let article = parse::parse_llm_output(&raw);
            info!(title = %article.title, "article generated");
            Ok(article)
        }
        Err(e) => {
            error!(error = %e, "article generation failed");
            Err(e.into())
        }
    }
}
