use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Data URL (or bare base64 payload) of the image.
    pub image_base64: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Label,
    pub probabilities: Vec<f64>,
}

/// Predicted class. Backends answer with a class name, the index of the
/// winning class, or some other JSON scalar; all render as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(i64),
    Number(f64),
    Flag(bool),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Number(value) => write!(f, "{}", value),
            Self::Flag(value) => write!(f, "{}", value),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRequest {
    pub question: String,
    pub top_k: u32,
    pub use_llm: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaResponse {
    pub answer: String,
    #[serde(default)]
    pub chunks: Vec<QaChunk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaChunk {
    pub source: String,
    pub score: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
