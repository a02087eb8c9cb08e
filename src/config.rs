// src/config.rs
// Process-wide settings, read once at startup and never mutated.

use std::env;

use crate::error::ResearchError;

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";

/// Everything the generation endpoint needs, collected in one place and
/// handed to the brain at construction time.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    pub endpoint_url: String,
    pub api_token: String,
    pub temperature: f32,
    pub max_new_tokens: u32,
    pub top_p: f32,
    pub repetition_penalty: f32,
}

impl ResearchConfig {
    /// Reads the API token (and an optional endpoint override) from the
    /// process environment. A local `.env` file is loaded first when one
    /// exists; its absence is not an error.
    pub fn from_env() -> Result<Self, ResearchError> {
        dotenvy::dotenv().ok();

        let api_token = env::var("HUGGINGFACEHUB_API_TOKEN").map_err(|_| {
            ResearchError::Config(
                "HUGGINGFACEHUB_API_TOKEN is not set (export it or add it to a .env file)"
                    .to_string(),
            )
        })?;

        let endpoint_url =
            env::var("RESEARCH_ENDPOINT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());

        Ok(Self {
            endpoint_url,
            api_token,
            temperature: 0.3,
            max_new_tokens: 250,
            top_p: 0.95,
            repetition_penalty: 1.15,
        })
    }
}
