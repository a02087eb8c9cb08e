// src/brain.rs
// SAGE CORE - HOSTED INFERENCE BRIDGE
// One blocking round trip per query to the Hugging Face text-generation
// endpoint. No retry, no streaming.

use serde_json::{json, Value};

use crate::config::ResearchConfig;
use crate::error::ResearchError;

pub struct ResearchBrain {
    config: ResearchConfig,
}

impl ResearchBrain {
    pub fn new(config: ResearchConfig) -> Self {
        Self { config }
    }

    /// Sends the prompt and returns the generated text. Any failure here is
    /// fatal for the current query; the caller decides what to tell the user.
    pub fn invoke(&self, prompt: &str) -> Result<String, ResearchError> {
        let response: Value = ureq::post(&self.config.endpoint_url)
            .set("Authorization", &format!("Bearer {}", self.config.api_token))
            .send_json(json!({
                "inputs": prompt,
                "parameters": {
                    "temperature": self.config.temperature,
                    "max_new_tokens": self.config.max_new_tokens,
                    "top_p": self.config.top_p,
                    "repetition_penalty": self.config.repetition_penalty,
                    "return_full_text": false,
                },
            }))?
            .into_json()?;

        extract_generated_text(&response)
            .ok_or_else(|| ResearchError::MalformedResponse(response.to_string()))
    }
}

/// The inference API answers `[{"generated_text": ...}]`; some deployments
/// return the bare object instead. Anything else is unusable.
fn extract_generated_text(response: &Value) -> Option<String> {
    let text = match response {
        Value::Array(items) => items.first()?.get("generated_text")?.as_str()?,
        Value::Object(_) => response.get("generated_text")?.as_str()?,
        _ => return None,
    };
    Some(text.to_string())
}
