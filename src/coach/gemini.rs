//! Gemini-backed coach over the `generateContent` REST endpoint.
//!
//! The request carries the fixed system instruction plus a single user
//! prompt; no conversation history is kept server-side.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CoachError, CoachProvider, HabitSuggestion, SYSTEM_PROMPT};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiCoach {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiCoach {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }

    /// One generateContent round trip: system instruction + prompt in,
    /// concatenated candidate text out.
    async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
        let body = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoachError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::Request(format!("HTTP {status}: {body}")));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Parse(e.to_string()))?;

        let candidate = reply
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CoachError::Parse("no candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.trim().is_empty() {
            return Err(CoachError::Parse("empty candidate text".to_string()));
        }

        Ok(text)
    }
}

#[async_trait]
impl CoachProvider for GeminiCoach {
    async fn ask(&self, question: &str) -> Result<String, CoachError> {
        self.generate(question).await
    }

    async fn suggest_habits(&self, objective: &str) -> Result<Vec<HabitSuggestion>, CoachError> {
        let prompt = format!(
            "Suggest 3 to 5 small daily habits that work toward this objective: \"{objective}\". \
             Reply with ONLY a JSON array of objects, each with a \"name\" (short habit name) \
             and an \"icon\" (a single emoji). No prose, no markdown."
        );
        let raw = self.generate(&prompt).await?;
        parse_suggestions(&raw)
    }
}

/// Parse the model's habit-suggestion reply, tolerating a markdown code
/// fence around the JSON array.
pub fn parse_suggestions(raw: &str) -> Result<Vec<HabitSuggestion>, CoachError> {
    let json = strip_code_fence(raw.trim());
    serde_json::from_str(json)
        .map_err(|e| CoachError::Parse(format!("expected a JSON array of habits: {e}")))
}

/// Models often wrap JSON in ```json ... ``` despite instructions not to.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the fence line itself ("```json" or bare "```")
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
