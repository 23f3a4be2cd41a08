use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::app_config::OracleSection;
use crate::core::errors::{KaidokuError, Result};
use crate::core::traits::oracle::PlausibilityOracle;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Only a response starting with this counts as an affirmative verdict.
const AFFIRMATIVE_PREFIX: &str = "はい";

/// Gemini-backed plausibility oracle.
///
/// Issues one blocking `generateContent` round trip per candidate via a
/// current-thread runtime. Every transport failure (timeout, non-2xx
/// status, unparseable body, empty response) degrades to a negative
/// verdict; the oracle never errors once constructed.
#[derive(Debug)]
pub struct GeminiOracle {
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiOracle {
    /// Build the oracle from the `[oracle]` config section.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configured API-key environment variable is
    /// unset, detected before any cipher work begins.
    pub fn from_config(section: &OracleSection) -> Result<Self> {
        let api_key = std::env::var(&section.api_key_env).map_err(|_| {
            KaidokuError::InvalidConfig {
                detail: format!(
                    "No API key for the plausibility oracle.\n\n  \
                     Set the {} environment variable, or point [oracle].api_key_env\n  \
                     in kaidoku.toml at the variable that holds your key.",
                    section.api_key_env
                ),
            }
        })?;

        Ok(Self {
            api_key,
            model: section.model.clone(),
            timeout: Duration::from_secs(section.timeout_secs),
        })
    }

    /// The yes/no judgement prompt embedding the candidate text.
    fn build_prompt(text: &str) -> String {
        format!(
            "あなたは文章の自然さを判定するAIです。\n\
             以下の文は自然で意味が通じる日本語ですか？端的に「はい」か「いいえ」で答えてください。\n\
             {text}"
        )
    }

    /// One round trip to the model. Never errors: returns `None` on any
    /// failure (network, status, parse).
    fn query(&self, prompt: &str) -> Option<String> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .ok()?;

        rt.block_on(async {
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(concat!("kaidoku/", env!("CARGO_PKG_VERSION")))
                .build()
                .ok()?;

            let url = format!(
                "{GEMINI_API_BASE}/{}:generateContent?key={}",
                self.model, self.api_key
            );
            let request = GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            };

            let resp = client.post(&url).json(&request).send().await.ok()?;
            if !resp.status().is_success() {
                return None;
            }

            let response: GenerateContentResponse = resp.json().await.ok()?;
            response
                .candidates
                .into_iter()
                .next()?
                .content
                .parts
                .into_iter()
                .next()
                .map(|part| part.text)
        })
    }
}

impl PlausibilityOracle for GeminiOracle {
    fn is_meaningful(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.query(&Self::build_prompt(text)) {
            Some(answer) => is_affirmative(&answer),
            None => false,
        }
    }
}

/// Whether an oracle answer reads as a yes.
fn is_affirmative(answer: &str) -> bool {
    answer.trim_start().starts_with(AFFIRMATIVE_PREFIX)
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// The subset of the `generateContent` response kaidoku reads.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}
