use crate::api::{PredictionResponse, QaChunk, QaResponse};

pub const PREDICTING: &str = "Predicting...";
pub const THINKING: &str = "Thinking...";

const SEPARATOR: &str = "•";

pub fn format_score(value: f64) -> String {
    format!("{:.3}", value)
}

pub fn render_prediction(response: &PredictionResponse) -> String {
    let probabilities = response
        .probabilities
        .iter()
        .map(|p| format_score(*p))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Prediction: {}\nProbabilities: {}",
        response.prediction, probabilities
    )
}

fn render_chunk(chunk: &QaChunk) -> String {
    // Chunk text is emitted untouched so its line breaks survive
    format!(
        "{} {} score={}\n{}",
        chunk.source,
        SEPARATOR,
        format_score(chunk.score),
        chunk.text
    )
}

pub fn render_answer(response: &QaResponse) -> String {
    let mut out = format!("Answer\n{}\n\nSources", response.answer);
    for chunk in &response.chunks {
        out.push_str("\n\n");
        out.push_str(&render_chunk(chunk));
    }
    out
}
