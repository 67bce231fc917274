#![allow(dead_code)]

use super::mocks::{MockBackend, RecordingOutput};
use shipsafe_client::{
    api::{Label, PredictionResponse, QaChunk, QaResponse},
    config::{BackendConfig, Config},
    submitter::RequestSubmitter,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.backend = BackendConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    };
    config.logs.level = "debug".to_string();
    config
}

/// Build a submitter around `backend` with two recording regions
pub fn create_submitter(
    backend: MockBackend,
) -> (RequestSubmitter, RecordingOutput, RecordingOutput) {
    let prediction_out = RecordingOutput::new();
    let answer_out = RecordingOutput::new();
    let submitter = RequestSubmitter::new(
        Box::new(backend),
        Box::new(prediction_out.clone()),
        Box::new(answer_out.clone()),
        4,
    );
    (submitter, prediction_out, answer_out)
}

/// Write `bytes` to a temporary file with the given suffix
pub fn create_image_file(suffix: &str, bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    file
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn cat_prediction() -> PredictionResponse {
    PredictionResponse {
        prediction: Label::from("cat"),
        probabilities: vec![0.1, 0.9],
    }
}

pub fn answer_with_chunk(answer: &str, source: &str, score: f64, text: &str) -> QaResponse {
    QaResponse {
        answer: answer.to_string(),
        chunks: vec![QaChunk {
            source: source.to_string(),
            score,
            text: text.to_string(),
        }],
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
backend:
  base_url: "http://localhost:9000/"
  timeout_secs: 10

qa:
  top_k: 6
  use_llm: true

logs:
  level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
backend:
  base_url: "http://localhost:9000"
  timeout_secs: "soon"

qa:
  top_k: -1
"#;
