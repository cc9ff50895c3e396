use anyhow::Result;
use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::wire::{ChatRequest, ChatResponse};

pub mod groq;

#[async_trait]
pub trait Provider: Send + Sync {
    async fn send(&self, req: &ChatRequest, debug: bool) -> Result<ChatResponse>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// The credential is resolved once by the caller (main) and handed in here;
/// providers never read the environment themselves.
pub fn make_provider(kind: ProviderKind, cfg: &Config, api_key: String) -> DynProvider {
    match kind {
        ProviderKind::Groq => Box::new(groq::GroqProvider::new(
            api_key,
            cfg.api_base.clone(),
            cfg.timeout_secs,
        )),
    }
}
