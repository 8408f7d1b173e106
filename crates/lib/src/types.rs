use crate::constants::{
    DEFAULT_AI_PROVIDER, DEFAULT_GEMINI_MODEL, DEFAULT_STIPEND, DEFAULT_TRANSPORT_ALLOWANCE,
    MARKDOWN_CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- Form Parameters ---

/// The training area of the internship positions.
///
/// The form offers a closed list of areas plus an "other" option that takes
/// free text. Parsing maps the labels (and their slugs) of the closed list to
/// their variants and keeps anything else verbatim as `Other`, so an `Other`
/// built through `parse` or `TrainingArea::other` never holds a closed-list
/// label. The word "outra" alone names the option, not an area, and is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TrainingArea {
    #[default]
    Direito,
    Psicologia,
    ServicoSocial,
    Administracao,
    Other(String),
}

impl TrainingArea {
    /// Labels of the closed list, in the order the form presents them.
    pub const LABELS: [&'static str; 4] =
        ["Direito", "Psicologia", "Serviço Social", "Administração"];

    /// Builds the area for a free-text name, normalizing closed-list labels.
    pub fn other(name: &str) -> Result<Self, String> {
        name.parse()
    }

    pub fn label(&self) -> &str {
        match self {
            TrainingArea::Direito => Self::LABELS[0],
            TrainingArea::Psicologia => Self::LABELS[1],
            TrainingArea::ServicoSocial => Self::LABELS[2],
            TrainingArea::Administracao => Self::LABELS[3],
            TrainingArea::Other(text) => text,
        }
    }
}

impl fmt::Display for TrainingArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrainingArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        let area = match normalized.as_str() {
            "direito" => TrainingArea::Direito,
            "psicologia" => TrainingArea::Psicologia,
            "serviço social" | "servico social" => TrainingArea::ServicoSocial,
            "administração" | "administracao" => TrainingArea::Administracao,
            "outra" | "outras" | "other" => {
                return Err(format!(
                    "'{}' is not an area; give the name of the training area",
                    s.trim()
                ))
            }
            _ => TrainingArea::Other(s.to_string()),
        };
        Ok(area)
    }
}

impl TryFrom<String> for TrainingArea {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TrainingArea> for String {
    fn from(value: TrainingArea) -> Self {
        value.label().to_string()
    }
}

/// Weekly workload of the position. The form offers exactly three options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "HoursRepr", into = "String")]
pub enum WeeklyHours {
    #[default]
    Twenty,
    TwentyFive,
    Thirty,
}

impl WeeklyHours {
    pub fn hours(&self) -> u32 {
        match self {
            WeeklyHours::Twenty => 20,
            WeeklyHours::TwentyFive => 25,
            WeeklyHours::Thirty => 30,
        }
    }

    pub fn from_hours(hours: u32) -> Option<Self> {
        match hours {
            20 => Some(WeeklyHours::Twenty),
            25 => Some(WeeklyHours::TwentyFive),
            30 => Some(WeeklyHours::Thirty),
            _ => None,
        }
    }
}

impl fmt::Display for WeeklyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} horas semanais", self.hours())
    }
}

impl From<WeeklyHours> for String {
    fn from(value: WeeklyHours) -> Self {
        value.to_string()
    }
}

/// Accepts `25`, `"25"` or `"25 horas semanais"` in parameter files.
#[derive(Deserialize)]
#[serde(untagged)]
enum HoursRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<HoursRepr> for WeeklyHours {
    type Error = String;

    fn try_from(value: HoursRepr) -> Result<Self, Self::Error> {
        let hours = match value {
            HoursRepr::Number(n) => n,
            HoursRepr::Text(text) => text
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| format!("invalid weekly hours: '{text}'"))?,
        };
        WeeklyHours::from_hours(hours)
            .ok_or_else(|| format!("weekly hours must be 20, 25 or 30, got {hours}"))
    }
}

/// The parameters collected by the form for a single draft.
///
/// All fields are free text substituted verbatim into the prompt. Nothing is
/// validated; a blank field simply renders blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Unidade / Comarca.
    pub unit: String,
    pub area: TrainingArea,
    /// Número de vagas, e.g. "02 (duas) vagas + Cadastro de Reserva".
    pub positions: String,
    pub stipend: String,
    pub transport_allowance: String,
    pub weekly_hours: WeeklyHours,
    /// Supervisor name and role.
    pub supervisor: String,
    /// Any extra rules, e.g. "Prova será online".
    pub extra_info: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            unit: String::new(),
            area: TrainingArea::default(),
            positions: String::new(),
            stipend: DEFAULT_STIPEND.to_string(),
            transport_allowance: DEFAULT_TRANSPORT_ALLOWANCE.to_string(),
            weekly_hours: WeeklyHours::default(),
            supervisor: String::new(),
            extra_info: String::new(),
        }
    }
}

// --- Reference Context ---

/// Text extracted from one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDocument {
    /// The uploaded file name.
    pub source: String,
    /// Extracted text. Every page or file ends with a newline.
    pub text: String,
}

/// The extracted text of all uploaded documents, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceContext {
    pub documents: Vec<ReferenceDocument>,
}

impl ReferenceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: impl Into<String>, text: impl Into<String>) {
        self.documents.push(ReferenceDocument {
            source: source.into(),
            text: text.into(),
        });
    }

    /// The flat concatenation embedded into the prompt.
    pub fn as_prompt_text(&self) -> String {
        self.documents.iter().map(|d| d.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.iter().all(|d| d.text.is_empty())
    }

    /// Number of characters in the concatenated text.
    pub fn char_count(&self) -> usize {
        self.documents.iter().map(|d| d.text.chars().count()).sum()
    }
}

impl From<&str> for ReferenceContext {
    fn from(text: &str) -> Self {
        let mut context = Self::new();
        if !text.is_empty() {
            context.push("inline", text);
        }
        context
    }
}

// --- Generation Output ---

/// The draft returned by the AI provider, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub body: String,
}

impl GeneratedDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn as_markdown(&self) -> &str {
        &self.body
    }

    /// Packages the draft as a downloadable Markdown file.
    pub fn into_artifact(self, params: &GenerationParameters) -> DocumentArtifact {
        DocumentArtifact {
            file_name: artifact_file_name(params),
            content_type: MARKDOWN_CONTENT_TYPE,
            body: self.body,
        }
    }
}

/// A generated draft ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// `edital_{area}_{unit}.md`, with characters that would escape the target
/// directory replaced by `_`.
pub fn artifact_file_name(params: &GenerationParameters) -> String {
    let raw = format!("edital_{}_{}.md", params.area, params.unit);
    raw.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

// --- Provider Configuration ---

/// Configuration for the AI provider backing the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Required for Gemini.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_provider() -> String {
    DEFAULT_AI_PROVIDER.to_string()
}

fn default_model_name() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
        }
    }
}
