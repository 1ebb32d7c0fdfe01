use std::any::Any;
use std::error::Error as StdError;
use std::fmt::Write as _;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::RuntimeMode;
use crate::services::vision::VisionError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Message returned for failures outside the endpoint's own logic.
pub const FALLBACK_MESSAGE: &str = "Something broke!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No image data provided")]
    MissingImage,

    #[error("Invalid image format. Must be base64 encoded with data URI scheme")]
    MalformedImage(#[source] garde::Report),

    #[error(transparent)]
    Upstream(#[from] VisionError),

    #[error("Failed to parse model response as JSON: {0}")]
    InvalidCompletion(#[source] serde_json::Error),

    /// The request body could not be read or deserialized.
    #[error("{0}")]
    BadBody(#[source] BoxError),

    #[error("{0}")]
    Panic(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingImage => StatusCode::BAD_REQUEST,
            // Kept at 500 for compatibility with existing clients.
            AppError::MalformedImage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) | AppError::InvalidCompletion(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadBody(_) | AppError::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label for logs and the failure counter.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingImage => "missing_image",
            AppError::MalformedImage(_) => "malformed_image",
            AppError::Upstream(_) => "upstream",
            AppError::InvalidCompletion(_) => "invalid_completion",
            AppError::BadBody(_) => "bad_body",
            AppError::Panic(_) => "panic",
        }
    }

    /// Failures the endpoint does not handle itself get the generic body.
    fn is_fallback(&self) -> bool {
        matches!(self, AppError::BadBody(_) | AppError::Panic(_))
    }

    /// Debug form of the error followed by its source chain.
    pub fn trace(&self) -> String {
        let mut trace = format!("{self:?}");
        let mut source = self.source();
        while let Some(err) = source {
            let _ = write!(trace, "\ncaused by: {err}");
            source = err.source();
        }
        trace
    }

    /// Map the error to a status and JSON body, logging it on the way out.
    pub fn render(&self, mode: RuntimeMode) -> Response {
        let status = self.status();
        metrics::counter!("image_analysis_failures_total", "kind" => self.kind()).increment(1);

        let body = if self.is_fallback() {
            tracing::error!(
                kind = self.kind(),
                error = %self,
                trace = %self.trace(),
                "Unhandled request error"
            );
            ErrorBody {
                error: FALLBACK_MESSAGE.to_string(),
                stack: None,
                details: mode.exposes_error_detail().then(|| self.to_string()),
            }
        } else if status.is_client_error() {
            tracing::info!(kind = self.kind(), "{}", self);
            ErrorBody {
                error: self.to_string(),
                stack: None,
                details: None,
            }
        } else {
            if let AppError::Upstream(err) = self {
                tracing::error!(
                    kind = self.kind(),
                    upstream = err.kind(),
                    error = %self,
                    "Error analyzing image"
                );
            } else {
                tracing::error!(kind = self.kind(), error = %self, "Error analyzing image");
            }
            ErrorBody {
                error: self.to_string(),
                stack: mode.exposes_error_detail().then(|| self.trace()),
                details: None,
            }
        };

        (status, Json(body)).into_response()
    }

    pub fn from_panic(panic: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "handler panicked".to_string()
        };
        AppError::Panic(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadBody(Box::new(rejection))
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadBody(Box::new(rejection))
    }
}

/// Rendering used where the configured mode is not at hand, such as
/// extractor rejections; production hides all error detail.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render(RuntimeMode::Production)
    }
}
