use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of `POST /analyze-image`, from either a JSON or a form-encoded body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    pub base64_image: Option<String>,
}

/// An image encoded as a `data:image/...;base64,...` URI.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[garde(transparent)]
pub struct ImagePayload(#[garde(prefix("data:image"))] String);

impl ImagePayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type declared in the URI header, e.g. `image/png`.
    pub fn media_type(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split(',').next()?;
        header.split(';').next().filter(|m| !m.is_empty())
    }
}

impl AnalyzeImageRequest {
    /// Separates an absent image from one that is not a data URI.
    pub fn into_payload(self) -> Result<ImagePayload, AppError> {
        let raw = match self.base64_image {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(AppError::MissingImage),
        };

        let payload = ImagePayload(raw);
        payload.validate().map_err(AppError::MalformedImage)?;
        Ok(payload)
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub result: serde_json::Value,
}
