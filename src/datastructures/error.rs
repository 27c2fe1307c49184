use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("missing order field: {0}")]
    MissingField(&'static str),

    #[error("unknown shift type: {0}")]
    UnknownShiftType(String),

    #[error("unexpected {side} method: expected {expected}, got {found}")]
    UnexpectedMethod {
        side: &'static str,
        expected: String,
        found: String,
    },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("malformed order response: {0}")]
    Json(#[from] serde_json::Error),
}
