//! Request assembly and the Gemini `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pauta_core::media::{infer_mime_type, payload_of};
use pauta_core::AiSettings;

use crate::error::EngineError;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// One element of a multi-part request: text or an inline image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Prompt first, then one inline part per usable image in input order.
/// Entries without an extractable payload are skipped.
pub fn assemble_parts(prompt: String, images: &[String]) -> Vec<Part> {
    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(Part::Text { text: prompt });

    for (index, image) in images.iter().enumerate() {
        let Some(data) = payload_of(image) else {
            debug!(index, "skipping image without base64 payload");
            continue;
        };
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: infer_mime_type(image).to_string(),
                data: data.to_string(),
            },
        });
    }

    parts
}

/// A model that turns content parts into raw reply text.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, parts: &[Part]) -> Result<String, EngineError>;
}

// --- Gemini ---

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: &'a [Part],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; empty when the model returned none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Never holds the key; it is read from the environment on every call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    settings: AiSettings,
}

impl GeminiClient {
    pub fn new(settings: &AiSettings) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| EngineError::Client(e.to_string()))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        Ok(Self {
            http,
            endpoint,
            settings: settings.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, parts: &[Part]) -> Result<String, EngineError> {
        let api_key = self
            .settings
            .api_key()
            .ok_or_else(|| EngineError::MissingCredential(self.settings.api_key_var.clone()))?;

        let request = GenerateContentRequest {
            contents: [Content { role: "user", parts }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(X_GOOG_API_KEY, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = decoded.text();
        debug!(model = %self.settings.model, chars = text.chars().count(), "model reply received");
        Ok(text)
    }
}
