use crate::{
    Error, Result,
    api::{Backend, PredictionRequest, PredictionResponse, QaRequest},
    encode,
    view::{self, Output},
};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Validates user input, calls the backend and writes progress, results or
/// errors into the matching output region.
pub struct RequestSubmitter {
    backend: Box<dyn Backend>,
    prediction_out: Box<dyn Output>,
    answer_out: Box<dyn Output>,
    top_k: u32,
}

impl RequestSubmitter {
    pub fn new(
        backend: Box<dyn Backend>,
        prediction_out: Box<dyn Output>,
        answer_out: Box<dyn Output>,
        top_k: u32,
    ) -> Self {
        Self {
            backend,
            prediction_out,
            answer_out,
            top_k: top_k.max(1),
        }
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub async fn submit_prediction(&self, file: Option<&Path>) -> Result<()> {
        let out = self.prediction_out.as_ref();
        let Some(file) = file else {
            return Self::fail(out, Error::NoFileSelected);
        };

        let request_id = Uuid::new_v4();
        info!(%request_id, "Submitting prediction for {}", file.display());
        out.show(view::PREDICTING);

        match self.predict_file(file).await {
            Ok(response) => {
                info!(%request_id, "Prediction received: {}", response.prediction);
                out.show(&view::render_prediction(&response));
                Ok(())
            }
            Err(e) => {
                warn!(%request_id, "Prediction failed: {}", e);
                Self::fail(out, e)
            }
        }
    }

    async fn predict_file(&self, file: &Path) -> Result<PredictionResponse> {
        let image_base64 = encode::read_as_data_url(file).await?;
        self.backend
            .predict(&PredictionRequest { image_base64 })
            .await
    }

    pub async fn submit_question(&self, question: &str, use_llm: bool) -> Result<()> {
        let out = self.answer_out.as_ref();
        let question = question.trim();
        if question.is_empty() {
            return Self::fail(out, Error::EmptyQuestion);
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, use_llm, "Submitting question: {}", question);
        out.show(view::THINKING);

        let request = QaRequest {
            question: question.to_string(),
            top_k: self.top_k,
            use_llm,
        };

        match self.backend.ask(&request).await {
            Ok(response) => {
                info!(%request_id, "Answer received with {} chunks", response.chunks.len());
                out.show(&view::render_answer(&response));
                Ok(())
            }
            Err(e) => {
                warn!(%request_id, "Question failed: {}", e);
                Self::fail(out, e)
            }
        }
    }

    /// Checks the backend and reports the result on the answer region.
    pub async fn check_health(&self) -> Result<()> {
        let out = self.answer_out.as_ref();
        match self.backend.health().await {
            Ok(health) if health.ok => {
                out.show("Backend is healthy.");
                Ok(())
            }
            Ok(_) => Self::fail(out, Error::Unhealthy),
            Err(e) => Self::fail(out, e),
        }
    }

    fn fail(out: &dyn Output, error: Error) -> Result<()> {
        out.show(&error.user_message());
        Err(error)
    }
}
