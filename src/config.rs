use anyhow::Result;
use std::{env, path::PathBuf};

/// Relay configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,

    /// Bearer credential for the upstream API.
    pub api_key: String,

    /// Model identifier sent in every upstream payload.
    pub model: String,

    /// Upstream base URL, without the /v1/chat/completions suffix.
    pub base_url: String,

    pub debug: bool,
    pub verbose: bool,
}

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

impl Config {
    fn load_dotenv(custom_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = custom_path {
            if path.exists() && dotenvy::from_path(&path).is_ok() {
                return Some(path);
            }
            eprintln!("WARNING: config file not found: {}", path.display());
        }

        dotenvy::dotenv().ok()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_with_path(None)
    }

    pub fn from_env_with_path(custom_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = Self::load_dotenv(custom_path) {
            eprintln!("Loaded config from: {}", path.display());
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "GROQ_API_KEY is required.\n\
                    Set it in the environment or a .env file:\n\
                      GROQ_API_KEY=gsk_xxxxx"
                )
            })?;

        let model = env::var("RELAY_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = env::var("UPSTREAM_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if base_url.ends_with("/v1") {
            eprintln!("WARNING: UPSTREAM_BASE_URL ends with '/v1'");
            eprintln!(
                "   This will result in URLs like: {}/v1/chat/completions",
                base_url
            );
        }

        let debug = env::var("DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let verbose = env::var("VERBOSE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Config {
            port,
            api_key,
            model,
            base_url,
            debug,
            verbose,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> Config {
        Config {
            port: 5000,
            api_key: "test-key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.to_string(),
            debug: false,
            verbose: false,
        }
    }

    #[test]
    fn test_chat_completions_url() {
        let config = test_config("https://api.groq.com/openai");
        assert_eq!(
            config.chat_completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_completions_url_with_trailing_slash() {
        let config = test_config("https://api.groq.com/openai/");
        assert_eq!(
            config.chat_completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_completions_url_local() {
        let config = test_config("http://localhost:11434");
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }
}
