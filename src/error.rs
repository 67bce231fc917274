use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Pick an image first.")]
    NoFileSelected,

    #[error("Ask a question first.")]
    EmptyQuestion,

    /// Non-2xx response; the body is shown to the user verbatim.
    #[error("{body}")]
    Server { status: u16, body: String },

    #[error("Backend reported unhealthy")]
    Unhealthy,

    #[error("Failed to read file {path}: {message}")]
    File { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid data URL: {0}")]
    DataUrl(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Self::NoFileSelected => Self::NoFileSelected,
            Self::EmptyQuestion => Self::EmptyQuestion,
            Self::Unhealthy => Self::Unhealthy,
            Self::Server { status, body } => Self::Server {
                status: *status,
                body: body.clone(),
            },
            Self::File { path, message } => Self::File {
                path: path.clone(),
                message: message.clone(),
            },
            Self::Config(s) => Self::Config(s.clone()),
            Self::DataUrl(s) => Self::DataUrl(s.clone()),
            Self::Internal(s) => Self::Internal(s.clone()),
            // For errors that can't be cloned, convert to string representation
            Self::Serialization(e) => Self::Internal(format!("Serialization error: {}", e)),
            Self::Yaml(e) => Self::Internal(format!("YAML error: {}", e)),
            Self::Io(e) => Self::Internal(format!("IO error: {}", e)),
            Self::Network(e) => Self::Internal(format!("Network error: {}", e)),
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn file(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::File {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn data_url(msg: impl Into<String>) -> Self {
        Self::DataUrl(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Input validation failures are reported without touching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoFileSelected | Self::EmptyQuestion)
    }

    /// Text written to an output region when a submission fails.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}
