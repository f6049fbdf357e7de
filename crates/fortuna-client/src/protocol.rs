//! Wire types for the `generateContent` request and response.
//!
//! The request body is built from explicit typed structures rather than an
//! ad-hoc JSON map, and the response decode fails closed: anything that does
//! not match the expected `candidates[0].content.parts[0].text` path is
//! reported as a malformed response by the caller.

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

/// Request body for a `generateContent` call.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: WireGenerationConfig,
}

impl GenerateRequest {
    /// Build the fixed prompt-plus-image request.
    pub fn new(prompt: &str, image_base64: String, generation: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: Some(prompt.to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: image_base64,
                        }),
                    },
                ],
            }],
            generation_config: generation.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Generation parameters in wire form (camelCase keys).
#[derive(Debug, Serialize)]
pub(crate) struct WireGenerationConfig {
    pub temperature: f32,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "topP")]
    pub top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl From<GenerationConfig> for WireGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Response body of a successful `generateContent` call.
///
/// Every field is optional on the wire; [`GenerateResponse::first_text`]
/// resolves the expected path and returns `None` on any shape mismatch.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request =
            GenerateRequest::new("prompt text", "QUJD".to_string(), GenerationConfig::default());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt text");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["data"], "QUJD");
        assert_eq!(json["generationConfig"]["topK"], 32);
        assert_eq!(json["generationConfig"]["topP"], 0.95);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);

        // A part carries either text or inline data, never a null for the other.
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
        assert!(json["contents"][0]["parts"][1].get("text").is_none());
    }

    #[test]
    fn test_first_text_happy_path() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Good fortune awaits."}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("Good fortune awaits."));
    }

    #[test]
    fn test_first_text_ignores_extra_fields() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "ok"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 260}
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("ok"));
    }

    #[test]
    fn test_first_text_shape_mismatches() {
        let bodies = [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
        ];

        for body in bodies {
            let response: GenerateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.first_text(), None, "body {body} should not parse");
        }
    }
}
