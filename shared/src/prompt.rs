use crate::models::{FieldName, InputParameters};
use serde::Serialize;
use strum::IntoEnumIterator;

pub const SYSTEM_INSTRUCTION: &str = "Provide crop recommendations based on the given environmental and soil parameters. Suggest what crop should be grown on the soil";

const PROMPT_HEADER: &str = "Provide crop recommendations based on these values:";

/// Sampling parameters sent with a generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Temperature applied by the chat session on top of the model defaults.
    pub const CHAT_TEMPERATURE: f32 = 0.9;

    /// Model defaults with the chat-level temperature applied.
    pub fn for_chat() -> Self {
        Self {
            temperature: Self::CHAT_TEMPERATURE,
            ..Self::default()
        }
    }
}

/// A single-turn recommendation request, independent of any wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub system_instruction: String,
    pub message: String,
    pub generation: GenerationConfig,
}

impl RecommendationRequest {
    pub fn from_inputs(inputs: &InputParameters) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            message: build_prompt(inputs),
            generation: GenerationConfig::for_chat(),
        }
    }
}

/// Interpolates every measurement, with its unit, into the recommendation prompt.
pub fn build_prompt(inputs: &InputParameters) -> String {
    let mut prompt = String::from(PROMPT_HEADER);
    for field in FieldName::iter() {
        prompt.push_str("\n- ");
        prompt.push_str(field.display_name());
        prompt.push_str(": ");
        prompt.push_str(&field.with_unit(inputs.get(field)));
    }
    prompt
}
