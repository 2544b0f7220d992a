use crate::error::{ClassifyError, GenerateError};
use crate::file::UploadFile;
use crate::models::PredictionResult;
use crate::prompt::RecommendationRequest;
use async_trait::async_trait;

/// Remote leaf-disease classifier: one multipart image in, ranked predictions out.
#[async_trait(?Send)]
pub trait ClassificationService<F: UploadFile> {
    async fn classify(&self, file: &F) -> Result<PredictionResult, ClassifyError>;
}

/// Remote text generator answering a single-turn recommendation request.
#[async_trait(?Send)]
pub trait GenerativeTextService {
    async fn generate(&self, request: &RecommendationRequest) -> Result<String, GenerateError>;
}
