use serde::{Deserialize, Serialize};

use crate::cli::ProviderKind;
use crate::errors::FoundryError;
use crate::gateway;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: String,
    pub provider: ProviderKind,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    pub save_request: bool,
    pub save_response: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            provider: ProviderKind::Groq,
            model: gateway::DEFAULT_MODEL.into(),
            api_base: "https://api.groq.com/openai/v1".into(),
            timeout_secs: 120,
            save_request: false,
            save_response: false,
        }
    }
}

impl Config {
    /// CLI flags override file values only when actually given on the
    /// command line; absent flags leave the file/default values intact.
    pub fn apply_cli(&mut self, args: &crate::cli::Args) {
        if let Some(root) = &args.root {
            self.root = root.clone();
        }
        if let Some(provider) = args.provider {
            self.provider = provider;
        }
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
        self.save_request |= args.save_request;
        self.save_response |= args.save_response;
    }

    /// Defaults, overlaid by the TOML file at `path` when given.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let raw = fs_err::read_to_string(p)?;
                let cfg = toml::from_str(&raw)
                    .map_err(|e| FoundryError::Config(format!("{p}: {e}")))?;
                Ok(cfg)
            }
        }
    }
}

/// Read the provider credential once at startup. Absent or unreadable means an
/// empty credential: the provider is still constructed and every call fails at
/// request time with an "Error: ..." result.
pub fn api_key_from_env() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_default()
}
