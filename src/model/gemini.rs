// SPDX-License-Identifier: MIT

//! Gemini Model - Google's Gemini API implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::{Content, GenerationConfig, Model};
use crate::error::ModelError;

/// Google Gemini model implementation
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model_name: String,
}

impl GeminiModel {
    pub fn new(model_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model_name: model_name.into(),
        }
    }

    /// Create a GeminiModel from the `GOOGLE_API_KEY` environment variable
    pub fn from_env(model_name: impl Into<String>) -> Result<Self, ModelError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| ModelError::ApiKeyMissing("Gemini".to_string()))?;
        Ok(Self::new(model_name, api_key))
    }
}

/// Build the request body for the generateContent endpoint.
///
/// Gemini does not accept a "system" role in `contents`; system messages go
/// into the top-level `systemInstruction` field. Assistant turns map to the
/// "model" role.
fn build_request_body(history: &[Content], config: Option<&GenerationConfig>) -> serde_json::Value {
    let mut system_parts: Vec<serde_json::Value> = Vec::new();
    let mut contents: Vec<serde_json::Value> = Vec::new();

    for c in history {
        match c.role.as_str() {
            "system" => system_parts.push(json!({ "text": c.text })),
            "assistant" | "model" => {
                contents.push(json!({ "role": "model", "parts": [{ "text": c.text }] }))
            }
            _ => contents.push(json!({ "role": "user", "parts": [{ "text": c.text }] })),
        }
    }

    let mut body = json!({ "contents": contents });

    if !system_parts.is_empty() {
        body["systemInstruction"] = json!({ "parts": system_parts });
    }

    if let Some(config) = config {
        let mut generation_config = serde_json::Map::new();
        if let Some(t) = config.temperature {
            generation_config.insert("temperature".to_string(), json!(t));
        }
        if let Some(max) = config.max_output_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation_config);
        }
    }

    body
}

/// Extract the concatenated text parts from a generateContent response
fn parse_response_text(resp_json: &serde_json::Value) -> Result<String, ModelError> {
    let candidates = resp_json["candidates"]
        .as_array()
        .ok_or_else(|| ModelError::InvalidResponse("No candidates in response".to_string()))?;
    let candidate = candidates
        .first()
        .ok_or_else(|| ModelError::InvalidResponse("Empty candidates".to_string()))?;

    if let Some(finish_reason) = candidate.get("finishReason").and_then(|v| v.as_str()) {
        log::debug!("Gemini finish reason: {}", finish_reason);
        if finish_reason == "SAFETY" {
            return Err(ModelError::InvalidResponse(
                "Gemini blocked response due to safety filters".to_string(),
            ));
        }
    }

    let parts = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            ModelError::InvalidResponse(format!("No content parts in candidate: {}", candidate))
        })?;

    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(ModelError::InvalidResponse(
            "Empty text in Gemini response".to_string(),
        ));
    }

    Ok(text)
}

#[async_trait]
impl Model for GeminiModel {
    async fn generate(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> Result<String, ModelError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let body = build_request_body(history, config);

        log::debug!(
            "Gemini request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                provider: "Gemini".to_string(),
                message: text,
            });
        }

        let resp_json: serde_json::Value = resp.json().await?;
        parse_response_text(&resp_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_body_maps_roles() {
        let history = vec![
            Content::system("You are a classifier."),
            Content::user("hello"),
            Content::assistant("hi"),
        ];
        let body = build_request_body(&history, None);

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a classifier.");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_build_body_includes_temperature() {
        let config = GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: None,
        };
        let body = build_request_body(&[Content::user("q")], Some(&config));
        // Temperature is f32; compare against an f32-sourced value so the
        // serialized representation matches
        assert_eq!(body["generationConfig"]["temperature"], json!(0.7f32));
        let t = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((t - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_build_body_omits_empty_generation_config() {
        let body = build_request_body(&[Content::user("q")], Some(&GenerationConfig::default()));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_parse_response_text() {
        let resp = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "world" }] },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(parse_response_text(&resp).unwrap(), "Hello world");
    }

    #[test]
    fn test_parse_response_no_candidates() {
        let resp = json!({ "candidates": [] });
        assert!(parse_response_text(&resp).is_err());
    }

    #[test]
    fn test_parse_response_safety_block() {
        let resp = json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        });
        let err = parse_response_text(&resp).unwrap_err();
        assert!(err.to_string().contains("safety"));
    }
}
