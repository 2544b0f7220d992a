use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const PREDICT_ENDPOINT_KEY: &str = "PREDICT_ENDPOINT";
pub const GEMINI_API_KEY_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_KEY: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL_KEY: &str = "GEMINI_BASE_URL";

/// Where leaf images are posted for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub endpoint: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let endpoint = non_blank(lookup(PREDICT_ENDPOINT_KEY))
            .unwrap_or_else(|| DEFAULT_PREDICT_ENDPOINT.to_string());
        validate_url(PREDICT_ENDPOINT_KEY, &endpoint)?;
        Ok(Self { endpoint })
    }
}

/// Credentials and model selection for the generative-text service.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerativeConfig {
    api_key: String,
    pub model: String,
    pub base_url: String,
}

// Keeps the key out of logs.
impl std::fmt::Debug for GenerativeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GenerativeConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self {
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        })
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(GEMINI_API_KEY_KEY).unwrap_or_default())?;

        if let Some(model) = lookup(GEMINI_MODEL_KEY) {
            if model.trim().is_empty() {
                return Err(ConfigError::Blank(GEMINI_MODEL_KEY.to_string()));
            }
            config.model = model;
        }

        if let Some(base_url) = non_blank(lookup(GEMINI_BASE_URL_KEY)) {
            validate_url(GEMINI_BASE_URL_KEY, &base_url)?;
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            key: key.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}
