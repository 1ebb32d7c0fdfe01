use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::request::{AnalyzeImageRequest, AnalyzeImageResponse};
use crate::services::analysis::analyze_beverage;

/// Request body parsed according to its content type.
///
/// JSON and URL-encoded forms are read; any other body is ignored and
/// treated as carrying no fields.
pub struct ImageUpload(pub AnalyzeImageRequest);

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<AnalyzeImageRequest>::from_request(req, state).await?;
            Ok(Self(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<AnalyzeImageRequest>::from_request(req, state).await?;
            Ok(Self(body))
        } else {
            Ok(Self(AnalyzeImageRequest::default()))
        }
    }
}

/// POST /analyze-image — Identify the beverage in a data-URI image.
pub async fn analyze_image(
    State(state): State<AppState>,
    upload: Result<ImageUpload, AppError>,
) -> Response {
    tracing::info!("Request received");
    metrics::counter!("image_analysis_requests_total").increment(1);

    match analyze(&state, upload).await {
        Ok(result) => (StatusCode::OK, Json(AnalyzeImageResponse { result })).into_response(),
        Err(err) => err.render(state.mode),
    }
}

async fn analyze(
    state: &AppState,
    upload: Result<ImageUpload, AppError>,
) -> Result<serde_json::Value, AppError> {
    let ImageUpload(request) = upload?;
    let image = request.into_payload()?;
    analyze_beverage(state.vision.as_ref(), &image).await
}
