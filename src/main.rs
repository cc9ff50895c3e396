use clap::Parser;
use std::path::Path;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod gateway;
mod log;
mod panel;
mod prompt;
mod provider;
mod ux;
mod wire;

use gateway::Gateway;
use panel::{Inputs, Panel, PanelOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::load(args.config.as_deref())?;
    cfg.apply_cli(&args);

    let txid = Uuid::new_v4();
    if args.debug {
        println!("debug: flag enabled");
        log::print_planned_paths(Path::new(&cfg.root), txid);
    }

    // Credential is read exactly once here and handed to the provider.
    let api_key = config::api_key_from_env();
    let prov = provider::make_provider(cfg.provider, &cfg, api_key);
    let gw = Gateway::new(prov, cfg.model.clone(), args.debug);

    match &args.command {
        Some(cmd) => {
            let (panel, inputs) = match cmd {
                cli::Command::Ideas { theme } => (
                    Panel::Ideas,
                    Inputs { theme: theme.clone(), ..Default::default() },
                ),
                cli::Command::Canvas { idea } => (
                    Panel::Canvas,
                    Inputs { idea: idea.clone(), ..Default::default() },
                ),
                cli::Command::Market { idea } => (
                    Panel::Market,
                    Inputs { idea: idea.clone(), ..Default::default() },
                ),
                cli::Command::Deck { idea } => (
                    Panel::Deck,
                    Inputs { idea: idea.clone(), ..Default::default() },
                ),
                cli::Command::Qa { idea, question } => (
                    Panel::Qa,
                    Inputs {
                        idea: idea.clone(),
                        question: question.clone(),
                        ..Default::default()
                    },
                ),
            };
            run_panel(panel, &inputs, &gw, &cfg, &args, txid).await?;
        }
        None => interactive(&gw, &cfg, &args, txid).await?,
    }

    Ok(())
}

/// One panel action end to end: validate, call, print, save transcripts.
async fn run_panel(
    panel: Panel,
    inputs: &Inputs,
    gw: &Gateway,
    cfg: &config::Config,
    args: &cli::Args,
    txid: Uuid,
) -> anyhow::Result<()> {
    let pb = ux::spinner(!args.no_progress, panel);
    let outcome = panel::run(panel, inputs, gw).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match outcome {
        PanelOutcome::MissingInput(msg) => ux::print_missing_input(msg),
        PanelOutcome::Completed { prompt, outcome } => {
            ux::print_completion(panel, &outcome);
            if cfg.save_request || cfg.save_response {
                let req = gw.request_for(&prompt);
                let saved = log::save_exchange(
                    panel.stage(),
                    &req,
                    &outcome,
                    txid,
                    Path::new(&cfg.root),
                    cfg.save_request,
                    cfg.save_response,
                )?;
                if args.debug {
                    log::print_saved_paths(panel.stage(), &saved);
                }
            }
        }
    }
    Ok(())
}

/// Tabbed session in the terminal: theme and idea are held as session state,
/// one panel action runs to completion before the next is read.
async fn interactive(
    gw: &Gateway,
    cfg: &config::Config,
    args: &cli::Args,
    txid: Uuid,
) -> anyhow::Result<()> {
    ux::banner();

    let mut inputs = Inputs {
        theme: ux::read_line("Startup Theme or Problem Area"),
        idea: ux::read_line("Your Startup Idea"),
        question: String::new(),
    };

    while let Some(action) = ux::pick_action(&inputs.theme, &inputs.idea) {
        match action {
            ux::MenuAction::EditTheme => {
                inputs.theme = ux::read_line("Startup Theme or Problem Area");
            }
            ux::MenuAction::EditIdea => {
                inputs.idea = ux::read_line("Your Startup Idea");
            }
            ux::MenuAction::Run(panel) => {
                if panel == Panel::Qa {
                    inputs.question = ux::read_line("Ask an investor-style question");
                }
                run_panel(panel, &inputs, gw, cfg, args, txid).await?;
            }
        }
    }

    Ok(())
}
