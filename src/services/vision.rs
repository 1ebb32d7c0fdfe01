use async_trait::async_trait;

use crate::models::request::ImagePayload;

/// A multimodal model that answers a text prompt about one image.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Returns the model's raw text reply.
    async fn describe_image(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> Result<String, VisionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx reply from the API, with the message it reported.
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no completion content")]
    EmptyCompletion,

    /// Any other transport failure, e.g. from an in-process client.
    #[error("{0}")]
    Unavailable(String),
}

impl VisionError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            VisionError::Http(_) => "http",
            VisionError::Api { .. } => "api",
            VisionError::EmptyCompletion => "empty_completion",
            VisionError::Unavailable(_) => "unavailable",
        }
    }
}
