use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn parse_secs(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration: `config.toml` in the working directory if
    /// present, then environment overrides on top.
    pub fn new() -> Self {
        let mut config = Config {
            api_key: None,
            api_base: None,
            model: None,
            request_timeout_secs: None,
        };

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_base) = std::env::var("GEMINI_API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = Some(model);
        }
        if let Ok(timeout) = std::env::var("ADVISOR_TIMEOUT_SECS") {
            if let Some(secs) = parse_secs(&timeout) {
                config.request_timeout_secs = Some(secs);
            }
        }
        config
    }
}
