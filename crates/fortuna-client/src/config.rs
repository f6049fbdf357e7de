//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default `generateContent` endpoint (Gemini 2.0 Flash).
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Placeholder API key value. Leaving this (or an empty string) configured
/// selects the offline demo mode instead of calling the network.
pub const KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY";

/// Fixed prompt sent alongside every image.
pub(crate) const PROMPT: &str =
    "Look at this photo and tell me a fortune or an astrological interpretation inspired by it.";

/// Analysis client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key, passed as a query parameter. Empty or placeholder value
    /// selects offline demo mode.
    pub api_key: String,
    /// Base endpoint URL for the `generateContent` call.
    pub endpoint: String,
    /// Generation parameters, fixed per client (not caller-tunable).
    pub generation: GenerationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Whether this configuration selects offline demo mode.
    pub fn is_offline(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || key == KEY_PLACEHOLDER
    }
}

/// Generation parameters carried on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_k: 32,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_empty());

        let generation = config.generation;
        assert!((generation.temperature - 0.4).abs() < f32::EPSILON);
        assert_eq!(generation.top_k, 32);
        assert!((generation.top_p - 0.95).abs() < f32::EPSILON);
        assert_eq!(generation.max_output_tokens, 1024);
    }

    #[test]
    fn test_offline_detection() {
        let mut config = ClientConfig::default();
        assert!(config.is_offline());

        config.api_key = KEY_PLACEHOLDER.to_string();
        assert!(config.is_offline());

        config.api_key = "   ".to_string();
        assert!(config.is_offline());

        config.api_key = "AIza-real-key".to_string();
        assert!(!config.is_offline());
    }

    #[test]
    fn test_generation_overrides_via_serde() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api_key": "k", "generation": {"temperature": 0.9, "max_output_tokens": 256}}"#,
        )
        .unwrap();

        assert!((config.generation.temperature - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.generation.max_output_tokens, 256);
        // Unspecified fields keep their defaults.
        assert_eq!(config.generation.top_k, 32);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
