//! Wire types for the Gemini `generateContent` REST call.

use crate::error::GenerateError;
use crate::prompt::{GenerationConfig, RecommendationRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl From<&RecommendationRequest> for GenerateContentRequest {
    // Chat history is always empty, so the user message is the only turn.
    fn from(request: &RecommendationRequest) -> Self {
        Self {
            system_instruction: Content::text(None, &request.system_instruction),
            contents: vec![Content::text(Some("user"), &request.message)],
            generation_config: request.generation.clone(),
        }
    }
}

/// Finish reasons that make a candidate unusable.
pub const REJECTED_FINISH_REASONS: [&str; 3] = ["SAFETY", "RECITATION", "LANGUAGE"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    pub fn from_json(body: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(body).map_err(|e| GenerateError::Parse(e.to_string()))
    }

    /// Text of the first candidate, all parts joined.
    ///
    /// A candidate cut off for a safety, recitation or language reason is an
    /// error even when it carries partial text. With no candidates, a present
    /// `promptFeedback` means the prompt was blocked; otherwise the completion
    /// is the empty string.
    pub fn text(&self) -> Result<String, GenerateError> {
        let Some(candidate) = self.candidates.first() else {
            if let Some(feedback) = &self.prompt_feedback {
                return Err(GenerateError::PromptBlocked(feedback.block_reason.clone()));
            }
            return Ok(String::new());
        };

        if self.candidates.len() > 1 {
            log::warn!(
                "Completion has {} candidates, using the first",
                self.candidates.len()
            );
        }

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|reason| REJECTED_FINISH_REASONS.contains(reason))
        {
            return Err(GenerateError::StoppedEarly(reason.to_string()));
        }

        Ok(candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.as_str())
            .collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// `{"error": {...}}` body returned alongside non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

impl ApiErrorEnvelope {
    /// Builds the status error for a rejected call, falling back to the raw
    /// body when it is not an error envelope.
    pub fn into_error(status: u16, body: &str) -> GenerateError {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => GenerateError::Status {
                code: envelope.error.code.unwrap_or(status),
                message: match envelope.error.status {
                    Some(kind) => format!("{kind}: {}", envelope.error.message),
                    None => envelope.error.message,
                },
            },
            Err(_) => GenerateError::Status {
                code: status,
                message: body.to_string(),
            },
        }
    }
}
