use std::time::Instant;

use crate::error::AppError;
use crate::models::request::ImagePayload;
use crate::services::prompt::beverage_prompt;
use crate::services::vision::VisionClient;

/// Ask the model to identify the beverage and parse its reply as JSON.
///
/// The reply is relayed as-is; only its JSON syntax is checked.
pub async fn analyze_beverage(
    vision: &dyn VisionClient,
    image: &ImagePayload,
) -> Result<serde_json::Value, AppError> {
    let start = Instant::now();
    let reply = vision.describe_image(beverage_prompt(), image).await;
    metrics::histogram!("image_analysis_upstream_seconds").record(start.elapsed().as_secs_f64());

    let reply = reply?;
    tracing::info!("Analysis complete");
    tracing::debug!(reply = %reply, "Model reply");

    serde_json::from_str(&reply).map_err(AppError::InvalidCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::AnalyzeImageRequest;
    use crate::services::vision::VisionError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Canned {
        reply: Result<&'static str, &'static str>,
        seen_prompt: Mutex<Option<String>>,
    }

    impl Canned {
        fn new(reply: Result<&'static str, &'static str>) -> Self {
            Self {
                reply,
                seen_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl VisionClient for Canned {
        async fn describe_image(
            &self,
            prompt: &str,
            _image: &ImagePayload,
        ) -> Result<String, VisionError> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply
                .map(str::to_string)
                .map_err(|msg| VisionError::Unavailable(msg.to_string()))
        }
    }

    fn image() -> ImagePayload {
        AnalyzeImageRequest {
            base64_image: Some("data:image/jpeg;base64,/9j/4AAQ".to_string()),
        }
        .into_payload()
        .unwrap()
    }

    #[tokio::test]
    async fn parses_json_reply_and_sends_fixed_prompt() {
        let vision = Canned::new(Ok(r#"{"type":"Rum","brand":"Havana Club"}"#));

        let value = analyze_beverage(&vision, &image()).await.unwrap();

        assert_eq!(value, serde_json::json!({"type": "Rum", "brand": "Havana Club"}));
        assert_eq!(
            vision.seen_prompt.lock().unwrap().as_deref(),
            Some(beverage_prompt())
        );
    }

    #[tokio::test]
    async fn commentary_reply_is_invalid_completion() {
        let vision = Canned::new(Ok("sorry, I can't help"));

        let err = analyze_beverage(&vision, &image()).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidCompletion(_)));
    }

    #[tokio::test]
    async fn truncated_reply_is_invalid_completion() {
        let vision = Canned::new(Ok(r#"{"type":"Whiskey","flavor_profile":{"notes":["Va"#));

        let err = analyze_beverage(&vision, &image()).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidCompletion(_)));
    }

    #[tokio::test]
    async fn upstream_failure_keeps_its_message() {
        let vision = Canned::new(Err("connect ECONNREFUSED"));

        let err = analyze_beverage(&vision, &image()).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        assert_eq!(err.to_string(), "connect ECONNREFUSED");
    }
}
