use crate::{
    Result,
    api::{Backend, HttpBackend},
    config::Config,
    submitter::RequestSubmitter,
    view::{Output, TerminalOutput},
};
use std::{path::PathBuf, sync::Arc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A user action routed to one of the submitter's handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Predict(Option<PathBuf>),
    Ask { question: String, use_llm: bool },
    Health,
}

/// Explicit `--llm`/`--no-llm` choices win over the configured default.
pub fn resolve_use_llm(llm: bool, no_llm: bool, default: bool) -> bool {
    if llm {
        true
    } else if no_llm {
        false
    } else {
        default
    }
}

/// Owns the submitter and routes actions to it.
#[derive(Clone)]
pub struct App {
    submitter: Arc<RequestSubmitter>,
    use_llm_default: bool,
}

impl App {
    pub fn new(submitter: RequestSubmitter, use_llm_default: bool) -> Self {
        Self {
            submitter: Arc::new(submitter),
            use_llm_default,
        }
    }

    /// Wires an HTTP backend to terminal outputs. In the shell the regions
    /// are labelled because results from several actions interleave.
    pub fn from_config(config: &Config, labelled: bool) -> Result<Self> {
        let backend: Box<dyn Backend> = Box::new(HttpBackend::new(&config.backend)?);
        let (prediction_out, answer_out): (Box<dyn Output>, Box<dyn Output>) = if labelled {
            (
                Box::new(TerminalOutput::labelled("predict")),
                Box::new(TerminalOutput::labelled("qa")),
            )
        } else {
            (Box::new(TerminalOutput::new()), Box::new(TerminalOutput::new()))
        };

        info!("Using backend at {}", config.backend.base_url);

        let submitter = RequestSubmitter::new(backend, prediction_out, answer_out, config.qa.top_k);
        Ok(Self::new(submitter, config.qa.use_llm))
    }

    pub fn use_llm_default(&self) -> bool {
        self.use_llm_default
    }

    /// Runs the action to completion.
    pub async fn run(&self, action: Action) -> Result<()> {
        debug!("Running action: {:?}", action);
        match action {
            Action::Predict(file) => self.submitter.submit_prediction(file.as_deref()).await,
            Action::Ask { question, use_llm } => {
                self.submitter.submit_question(&question, use_llm).await
            }
            Action::Health => self.submitter.check_health().await,
        }
    }

    /// Starts the action on its own task. Earlier actions keep running and
    /// nothing orders their results.
    pub fn dispatch(&self, action: Action) -> JoinHandle<Result<()>> {
        let app = self.clone();
        tokio::spawn(async move { app.run(action).await })
    }
}
