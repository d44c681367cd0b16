use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key, appended to the endpoint as `?key=`
    pub gemini_api_key: String,

    /// Gemini generateContent endpoint
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Upper bound on a single text-generation call
    #[serde(default = "default_gemini_timeout_secs")]
    pub gemini_timeout_secs: u64,

    /// ML scoring service endpoint
    #[serde(default = "default_ml_service_url")]
    pub ml_service_url: String,

    #[serde(default = "default_ml_timeout_secs")]
    pub ml_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        .to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    10
}

fn default_ml_service_url() -> String {
    "http://localhost:5000/recommend".to_string()
}

fn default_ml_timeout_secs() -> u64 {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn gemini_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini_timeout_secs)
    }

    pub fn ml_timeout(&self) -> Duration {
        Duration::from_secs(self.ml_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let vars = vec![("GEMINI_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.gemini_api_key, "secret");
        assert!(config.gemini_api_url.ends_with(":generateContent"));
        assert_eq!(config.gemini_timeout(), Duration::from_secs(10));
        assert_eq!(config.ml_timeout(), Duration::from_secs(5));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let vars: Vec<(String, String)> = vec![("PORT".to_string(), "9000".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_overrides_are_applied() {
        let vars = vec![
            ("GEMINI_API_KEY".to_string(), "k".to_string()),
            ("GEMINI_TIMEOUT_SECS".to_string(), "3".to_string()),
            ("HOST".to_string(), "0.0.0.0".to_string()),
            ("PORT".to_string(), "3000".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.gemini_timeout(), Duration::from_secs(3));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
