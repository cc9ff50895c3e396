use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::FoundryError;
use crate::wire::{ChatRequest, ChatResponse};

/// Groq chat-completions adapter (OpenAI-compatible endpoint).
///
/// Holds the credential for the process lifetime; an empty key makes every
/// call fail at request time instead of at construction.
pub struct GroqProvider {
    api_key: String,
    api_base: String,
    client: Client,
    timeout_secs: u64,
}

impl GroqProvider {
    pub fn new(api_key: String, api_base: String, timeout_secs: u64) -> Self {
        Self {
            api_key,
            api_base,
            client: Client::new(),
            timeout_secs,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl super::Provider for GroqProvider {
    async fn send(&self, req: &ChatRequest, debug: bool) -> Result<ChatResponse> {
        if self.api_key.is_empty() {
            return Err(FoundryError::Config(
                "GROQ_API_KEY env var is not set".into(),
            )
            .into());
        }

        let url = self.endpoint();
        if debug {
            eprintln!(
                "debug[groq]: HTTP POST {} body:\n{}",
                url,
                serde_json::to_string_pretty(req)?
            );
        }

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(req)
            .send()
            .await
            .context("groq request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("groq read body failed")?;

        if debug {
            eprintln!("debug[groq]: raw status: {}", status);
            eprintln!("debug[groq]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(FoundryError::Provider(format!(
                "Groq API error ({status}): {text}"
            ))
            .into());
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("failed to parse Groq response: {e}\nRaw: {text}"))?;

        Ok(parsed)
    }
}
