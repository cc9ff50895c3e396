use crate::provider::DynProvider;
use crate::wire::{ChatRequest, Message};

/// Fixed system message sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are a startup coach, VC strategist, and pitch advisor.";

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Outcome of one completion round trip. Failures are values, not errors:
/// nothing past this boundary ever sees a provider `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Reply(String),
    Failed(String),
}

impl Completion {
    pub fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    /// Flat string shape the tool prints: the reply text, or "Error: {details}".
    pub fn render(&self) -> String {
        match self {
            Completion::Reply(text) => text.clone(),
            Completion::Failed(reason) => format!("Error: {reason}"),
        }
    }
}

/// One configured provider + default model, reused across calls.
pub struct Gateway {
    provider: DynProvider,
    model: String,
    debug: bool,
}

impl Gateway {
    pub fn new(provider: DynProvider, model: String, debug: bool) -> Self {
        Self { provider, model, debug }
    }

    pub fn request_for(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
        }
    }

    /// Single-turn exchange: fixed system message plus the prompt as the user
    /// message. One attempt, no retry; the reply is whitespace-trimmed.
    pub async fn complete(&self, prompt: &str) -> Completion {
        let req = self.request_for(prompt);
        match self.provider.send(&req, self.debug).await {
            Ok(resp) => match resp.first_content() {
                Some(content) => Completion::Reply(content.trim().to_string()),
                None => Completion::Failed("provider returned no choices".into()),
            },
            Err(e) => Completion::Failed(format!("{e:#}")),
        }
    }
}
