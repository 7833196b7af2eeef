use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("no maturity level {0}: levels run 0-9")]
    UnknownLevel(u8),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("agent '{agent}' failed: {reason}")]
    AgentFailed { agent: String, reason: String },

    #[error("assessment unavailable: no analyzer completed")]
    AssessmentUnavailable,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
