pub mod config;
pub mod error;
pub mod file;
pub mod gemini;
pub mod image_flow;
pub mod models;
pub mod notification;
pub mod parameter_flow;
pub mod prompt;
pub mod service;
pub mod status;

pub use config::{ClassifierConfig, GenerativeConfig};
pub use error::{ClassifyError, ConfigError, FlowError, GenerateError};
pub use file::UploadFile;
pub use image_flow::ImageSubmissionFlow;
pub use models::{FieldName, InputParameters, Prediction, PredictionResult};
pub use notification::{Notification, NotificationLevel};
pub use parameter_flow::ParameterSubmissionFlow;
pub use prompt::{GenerationConfig, RecommendationRequest};
pub use service::{ClassificationService, GenerativeTextService};
pub use status::SubmissionStatus;
