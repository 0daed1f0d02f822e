pub mod error;
pub mod markers;
pub mod media;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use error::{SettingsError, ValidationError};

// --- Report input ---

/// Which form the report came from. Decides the context block and the
/// stylistic directives sent to the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    General,
    FireRescue,
    Police,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::FireRescue => "fireRescue",
            Category::Police => "police",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service that attended a fire/rescue occurrence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Responder {
    #[default]
    FireDepartment,
    AmbulanceService,
    FireAndAmbulance,
    HighwayPatrol,
}

impl Responder {
    /// Label as it appears in the newsroom form and in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Responder::FireDepartment => "Corpo de Bombeiros",
            Responder::AmbulanceService => "SAMU",
            Responder::FireAndAmbulance => "Bombeiros e SAMU",
            Responder::HighwayPatrol => "ECO-050",
        }
    }
}

/// Category-specific fields. Each variant carries only its own form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReportDetails {
    General {
        #[serde(default)]
        location: String,
        #[serde(default)]
        account: String,
    },
    FireRescue {
        #[serde(default)]
        incident_type: String,
        #[serde(default)]
        parties: String,
        #[serde(default)]
        victim_count: String,
        #[serde(default)]
        injuries: String,
        #[serde(default)]
        responder: Responder,
        #[serde(default)]
        destination: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        account: String,
    },
    Police {
        #[serde(default)]
        occurrence_type: String,
        #[serde(default)]
        neighborhood: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        destination: String,
        #[serde(default)]
        unit: String,
        #[serde(default)]
        details: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    /// Calendar date as typed by the reporter; rendered verbatim.
    #[serde(default)]
    pub date: String,
    /// Local clock time as typed by the reporter; rendered verbatim.
    #[serde(default)]
    pub time: String,
    /// Images as base64 data URIs, in upload order.
    #[serde(default)]
    pub images: Vec<String>,
    pub details: ReportDetails,
}

impl ReportInput {
    pub fn category(&self) -> Category {
        match self.details {
            ReportDetails::General { .. } => Category::General,
            ReportDetails::FireRescue { .. } => Category::FireRescue,
            ReportDetails::Police { .. } => Category::Police,
        }
    }

    /// The image shown first when the article is displayed.
    pub fn lead_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Caller-side check run before generation.
    ///
    /// Only general reports have required fields; fire/rescue and police
    /// reports are accepted with any field left blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.details {
            ReportDetails::General { location, account } => {
                if location.trim().is_empty() || account.trim().is_empty() {
                    Err(ValidationError::IncompleteGeneralReport)
                } else {
                    Ok(())
                }
            }
            ReportDetails::FireRescue { .. } | ReportDetails::Police { .. } => Ok(()),
        }
    }
}

// --- Generated article ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArticle {
    pub title: String,
    pub body: String,
    pub social_caption: String,
}

impl GeneratedArticle {
    /// Headline and body as they are pasted into the website editor.
    pub fn site_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }

    pub fn social_text(&self) -> &str {
        &self.social_caption
    }
}

// --- AI Settings ---

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";

/// Non-secret generation settings. The API key itself only ever lives in
/// the environment variable named by `api_key_var`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSettings {
    pub model: String,
    pub base_url: String,
    pub api_key_var: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
        }
    }
}

impl AiSettings {
    /// Read the API key from the environment. Blank values count as absent.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn credential_available(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn require_credential(&self) -> Result<(), SettingsError> {
        if self.credential_available() {
            Ok(())
        } else {
            Err(SettingsError::MissingCredential(self.api_key_var.clone()))
        }
    }
}

/// Resolve the settings directory (~/.pauta/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pauta")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    read_settings_from(&settings_path())
}

/// Read settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn read_settings_from(path: &Path) -> AiSettings {
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), SettingsError> {
    write_settings_to(&settings_path(), settings)
}

pub fn write_settings_to(path: &Path, settings: &AiSettings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
