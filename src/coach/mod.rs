//! The AI wellness coach.
//!
//! [`CoachProvider`] abstracts over generative-model backends; the only
//! implementation today is [`gemini::GeminiCoach`]. The provider is optional
//! at runtime: with no API key configured the rest of the service runs
//! normally and coach requests fail with a configuration error.

pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CoachConfig;

/// Persona and guardrails sent with every coach request.
pub const SYSTEM_PROMPT: &str = "You are Tend, a friendly and motivational health and wellness \
    coach. Your goal is to give practical, safe, and positive advice grounded in healthy-living \
    principles. Never give direct medical advice or diagnoses; always encourage the user to see \
    a health professional for serious concerns. Answer concisely and encouragingly.";

/// Errors from a coach backend.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// The upstream request failed (network, HTTP error status).
    #[error("coach request failed: {0}")]
    Request(String),

    /// The upstream replied, but not in a shape we can use.
    #[error("coach returned an unusable reply: {0}")]
    Parse(String),
}

/// A habit idea proposed by the coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSuggestion {
    pub name: String,
    pub icon: String,
}

/// A generative-model backend the coach routes through.
#[async_trait]
pub trait CoachProvider: Send + Sync {
    /// Answer a free-form wellness question.
    async fn ask(&self, question: &str) -> Result<String, CoachError>;

    /// Propose habits (name + icon) that work toward an objective.
    async fn suggest_habits(&self, objective: &str) -> Result<Vec<HabitSuggestion>, CoachError>;
}

/// Build the provider named by the config, or `None` when no API key is set.
///
/// An unknown provider name is a configuration error; a missing key is not.
pub fn create_provider(config: &CoachConfig) -> anyhow::Result<Option<Box<dyn CoachProvider>>> {
    if config.api_key.is_empty() {
        tracing::warn!("no coach API key configured, coach endpoints will be unavailable");
        return Ok(None);
    }

    match config.provider.as_str() {
        "gemini" => {
            tracing::info!(model = %config.model, "coach provider: gemini");
            Ok(Some(Box::new(gemini::GeminiCoach::new(
                &config.api_key,
                &config.model,
            ))))
        }
        other => anyhow::bail!("unknown coach provider: {other}. Supported: gemini"),
    }
}
