use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpRxError {
    #[error("config error: {0}")]
    Config(String),

    #[error("no API key configured. Set GEMINI_API_KEY or run `helprx config --set-api-key YOUR_KEY`")]
    MissingApiKey,

    #[error("image read error: {0}")]
    ImageRead(String),

    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("the service returned no usable text")]
    EmptyResponse,

    #[error("failed to parse API response: {0}")]
    ApiParse(String),

    #[error("session state error: {0}")]
    State(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::session::TransitionError> for HelpRxError {
    fn from(err: crate::session::TransitionError) -> Self {
        HelpRxError::State(err.to_string())
    }
}

impl From<helprx_common::Error> for HelpRxError {
    fn from(err: helprx_common::Error) -> Self {
        match err {
            helprx_common::Error::EmptyResponse => HelpRxError::EmptyResponse,
            helprx_common::Error::Parse(msg) => HelpRxError::ApiParse(msg),
            helprx_common::Error::Json(e) => HelpRxError::ApiParse(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelpRxError>;
