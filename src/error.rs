use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::storage::StorageError;

/// One rejected field of a request payload.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    /// Names the missing entity, e.g. `"Round"`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid payload: {} issue(s)", .0.len())]
    InvalidInput(Vec<Issue>),
    #[error("db error: {0}")]
    Db(#[from] StorageError),
}

impl ResponseError for CoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CoreError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CoreError::NotFound(_) => {
                warn!("{self}");
                HttpResponse::NotFound().json(json!({ "message": self.to_string() }))
            }
            CoreError::InvalidInput(issues) => HttpResponse::BadRequest()
                .json(json!({ "message": "Invalid payload", "issues": issues })),
            CoreError::Db(e) => {
                error!("Storage failure: {e}");
                HttpResponse::InternalServerError()
                    .json(json!({ "message": "Internal server error" }))
            }
        }
    }
}
