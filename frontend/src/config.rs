use shared::config::{
    GEMINI_API_KEY_KEY, GEMINI_BASE_URL_KEY, GEMINI_MODEL_KEY, PREDICT_ENDPOINT_KEY,
};
use shared::{ClassifierConfig, ConfigError, GenerativeConfig};

/// Settings baked in at build time, e.g. `GEMINI_API_KEY=... trunk build`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub generative: Result<GenerativeConfig, ConfigError>,
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        PREDICT_ENDPOINT_KEY => option_env!("PREDICT_ENDPOINT"),
        GEMINI_API_KEY_KEY => option_env!("GEMINI_API_KEY"),
        GEMINI_MODEL_KEY => option_env!("GEMINI_MODEL"),
        GEMINI_BASE_URL_KEY => option_env!("GEMINI_BASE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

impl AppConfig {
    pub fn load() -> Self {
        let classifier = ClassifierConfig::from_lookup(build_env).unwrap_or_else(|e| {
            log::error!(
                "Invalid classifier configuration, using default endpoint: {}",
                e
            );
            ClassifierConfig::default()
        });

        let generative = GenerativeConfig::from_lookup(build_env);
        match &generative {
            Ok(config) => log::info!("Recommendations use model {}", config.model),
            Err(e) => log::warn!("Recommendations unavailable: {}", e),
        }

        Self {
            classifier,
            generative,
        }
    }
}
