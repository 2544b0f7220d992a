use crate::browser_file::BrowserFile;
use async_trait::async_trait;
use gloo_net::http::Request;
use shared::gemini::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use shared::{
    ClassificationService, ClassifierConfig, ClassifyError, GenerateError, GenerativeConfig,
    GenerativeTextService, PredictionResult, RecommendationRequest, UploadFile,
};
use wasm_bindgen::{JsCast, JsValue};

/// Posts the selected leaf image to the prediction endpoint.
#[derive(Clone, PartialEq)]
pub struct HttpClassifier {
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }
}

// Best-effort message from a thrown JS value; `None` lets the caller fall back.
fn js_message(value: &JsValue) -> Option<String> {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .filter(|message| !message.is_empty())
}

#[async_trait(?Send)]
impl ClassificationService<BrowserFile> for HttpClassifier {
    async fn classify(&self, file: &BrowserFile) -> Result<PredictionResult, ClassifyError> {
        let form_data =
            web_sys::FormData::new().map_err(|e| ClassifyError::Transport(js_message(&e)))?;
        form_data
            .append_with_blob_and_filename("file", file.as_blob(), &file.name())
            .map_err(|e| ClassifyError::Transport(js_message(&e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| ClassifyError::Transport(Some(e.to_string())))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(Some(e.to_string())))?;

        if !response.ok() {
            let status = response.status();
            log::warn!("Prediction endpoint answered {}", status);
            return Err(ClassifyError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Parse(e.to_string()))?;
        PredictionResult::from_json(&body)
    }
}

/// Gemini `generateContent` client built from injected configuration.
#[derive(Clone, PartialEq)]
pub struct GeminiClient {
    config: GenerativeConfig,
}

impl GeminiClient {
    pub fn new(config: GenerativeConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl GenerativeTextService for GeminiClient {
    async fn generate(&self, request: &RecommendationRequest) -> Result<String, GenerateError> {
        let payload = GenerateContentRequest::from(request);

        let response = Request::post(&self.config.generate_content_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&payload)
            .map_err(|e| GenerateError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiErrorEnvelope::into_error(status, &body));
        }

        GenerateContentResponse::from_json(&body)?.text()
    }
}

/// Stand-in used when the generative service has no usable configuration:
/// every call fails through the normal failure path.
#[derive(Clone, PartialEq)]
pub struct Unconfigured(pub shared::ConfigError);

#[async_trait(?Send)]
impl GenerativeTextService for Unconfigured {
    async fn generate(&self, _request: &RecommendationRequest) -> Result<String, GenerateError> {
        Err(GenerateError::Config(self.0.clone()))
    }
}
