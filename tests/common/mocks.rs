#![allow(dead_code)]

use async_trait::async_trait;
use shipsafe_client::{
    Error, Result,
    api::{
        Backend, HealthResponse, PredictionRequest, PredictionResponse, QaRequest, QaResponse,
    },
    view::Output,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Output region that remembers everything it was asked to show.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    pub shown: Arc<Mutex<Vec<String>>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    /// What the region currently displays.
    pub fn current(&self) -> Option<String> {
        self.shown.lock().unwrap().last().cloned()
    }
}

impl Output for RecordingOutput {
    fn show(&self, content: &str) {
        self.shown.lock().unwrap().push(content.to_string());
    }
}

/// Backend returning canned responses and recording every request.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub predictions: Arc<Mutex<Vec<PredictionResponse>>>,
    pub answers: Arc<Mutex<Vec<QaResponse>>>,
    pub prediction_requests: Arc<Mutex<Vec<PredictionRequest>>>,
    pub qa_requests: Arc<Mutex<Vec<QaRequest>>>,
    /// Delays applied to successive `ask` calls, in call order.
    pub ask_delays: Arc<Mutex<Vec<Duration>>>,
    pub error: Option<(u16, String)>,
    pub unhealthy: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(self, response: PredictionResponse) -> Self {
        self.predictions.lock().unwrap().push(response);
        self
    }

    pub fn with_answer(self, response: QaResponse) -> Self {
        self.answers.lock().unwrap().push(response);
        self
    }

    pub fn with_ask_delay(self, delay: Duration) -> Self {
        self.ask_delays.lock().unwrap().push(delay);
        self
    }

    pub fn with_server_error(mut self, status: u16, body: &str) -> Self {
        self.error = Some((status, body.to_string()));
        self
    }

    pub fn with_unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }

    /// Handles onto the request logs that stay valid after the backend is boxed.
    pub fn request_logs(
        &self,
    ) -> (
        Arc<Mutex<Vec<PredictionRequest>>>,
        Arc<Mutex<Vec<QaRequest>>>,
    ) {
        (self.prediction_requests.clone(), self.qa_requests.clone())
    }

    fn server_error(&self) -> Option<Error> {
        self.error.as_ref().map(|(status, body)| Error::Server {
            status: *status,
            body: body.clone(),
        })
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        self.prediction_requests
            .lock()
            .unwrap()
            .push(request.clone());

        if let Some(error) = self.server_error() {
            return Err(error);
        }

        let mut predictions = self.predictions.lock().unwrap();
        if predictions.is_empty() {
            return Err(Error::internal("No more mock predictions available"));
        }
        Ok(predictions.remove(0))
    }

    async fn ask(&self, request: &QaRequest) -> Result<QaResponse> {
        self.qa_requests.lock().unwrap().push(request.clone());

        let (delay, answer) = {
            let mut delays = self.ask_delays.lock().unwrap();
            let delay = (!delays.is_empty()).then(|| delays.remove(0));
            let mut answers = self.answers.lock().unwrap();
            let answer = (!answers.is_empty()).then(|| answers.remove(0));
            (delay, answer)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.server_error() {
            return Err(error);
        }

        answer.ok_or_else(|| Error::internal("No more mock answers available"))
    }

    async fn health(&self) -> Result<HealthResponse> {
        match self.server_error() {
            Some(error) => Err(error),
            None => Ok(HealthResponse {
                ok: !self.unhealthy,
            }),
        }
    }
}
