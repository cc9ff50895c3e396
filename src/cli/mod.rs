use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "groq")]
    Groq,
}

#[derive(Parser, Debug)]
#[command(name = "foundry", version, about = "Foundry AI - build, validate, and pitch your next startup from the terminal")]
pub struct Args {
    /// Run one panel directly; omit for the interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long)]
    pub root: Option<String>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Model identifier sent with every request.
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML config file; flags override its values.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Disable the spinner during the network round trip.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate 3 startup ideas from a theme
    Ideas {
        /// Startup theme or problem area
        #[arg(long, default_value = "")]
        theme: String,
    },
    /// Generate a Lean Canvas for an idea
    Canvas {
        #[arg(long)]
        idea: String,
    },
    /// Market validation for an idea
    Market {
        #[arg(long)]
        idea: String,
    },
    /// 9-slide investor pitch deck outline
    Deck {
        #[arg(long)]
        idea: String,
    },
    /// Answer an investor-style question about an idea
    Qa {
        #[arg(long)]
        idea: String,
        #[arg(long)]
        question: String,
    },
}
