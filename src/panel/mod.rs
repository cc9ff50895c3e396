use crate::gateway::{Completion, Gateway};
use crate::prompt;

/// The five interaction panels (tabs in the original layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Ideas,
    Canvas,
    Market,
    Deck,
    Qa,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Ideas,
        Panel::Canvas,
        Panel::Market,
        Panel::Deck,
        Panel::Qa,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Ideas => "Idea Generator",
            Panel::Canvas => "Lean Canvas Generator",
            Panel::Market => "Market Validation",
            Panel::Deck => "Pitch Deck Builder",
            Panel::Qa => "Investor Q&A",
        }
    }

    /// Stage label used for transcript file names.
    pub fn stage(&self) -> &'static str {
        match self {
            Panel::Ideas => "ideas",
            Panel::Canvas => "canvas",
            Panel::Market => "market",
            Panel::Deck => "deck",
            Panel::Qa => "qa",
        }
    }
}

/// Session text the panels draw from. The UI layer owns and mutates this;
/// panels only read it.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub theme: String,
    pub idea: String,
    pub question: String,
}

#[derive(Debug)]
pub enum PanelOutcome {
    /// Validation failed locally; no network call was made.
    MissingInput(&'static str),
    /// One round trip happened; `prompt` is what the gateway was given.
    Completed { prompt: String, outcome: Completion },
}

/// Runs one panel action: validate, build the prompt, one gateway round trip.
///
/// The Ideas panel intentionally skips the blank check and sends an empty
/// theme through the template, matching the original tool's behavior.
pub async fn run(panel: Panel, inputs: &Inputs, gateway: &Gateway) -> PanelOutcome {
    let blank_idea = inputs.idea.trim().is_empty();
    let prompt = match panel {
        Panel::Ideas => prompt::startup_ideas(&inputs.theme),
        Panel::Canvas => {
            if blank_idea {
                return PanelOutcome::MissingInput("Please input your startup idea.");
            }
            prompt::lean_canvas(&inputs.idea)
        }
        Panel::Market => {
            if blank_idea {
                return PanelOutcome::MissingInput("Please input your startup idea.");
            }
            prompt::market_validation(&inputs.idea)
        }
        Panel::Deck => {
            if blank_idea {
                return PanelOutcome::MissingInput("Please input your startup idea.");
            }
            prompt::pitch_deck(&inputs.idea)
        }
        Panel::Qa => {
            if blank_idea || inputs.question.trim().is_empty() {
                return PanelOutcome::MissingInput("Please input both the idea and question.");
            }
            prompt::investor_qa(&inputs.question, &inputs.idea)
        }
    };

    let outcome = gateway.complete(&prompt).await;
    PanelOutcome::Completed { prompt, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{Gateway, DEFAULT_MODEL};
    use crate::provider::Provider;
    use crate::wire::{ChatRequest, ChatResponse, Choice, ChoiceMessage};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Provider for CountingProvider {
        async fn send(&self, _req: &ChatRequest, _debug: bool) -> Result<ChatResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChatResponse {
                choices: vec![Choice {
                    message: ChoiceMessage { content: "ok".into() },
                }],
            })
        }
    }

    fn counting_gateway() -> (Gateway, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let gw = Gateway::new(
            Box::new(CountingProvider { calls: calls.clone() }),
            DEFAULT_MODEL.into(),
            false,
        );
        (gw, calls)
    }

    #[tokio::test]
    async fn blank_idea_panels_skip_the_network() {
        for panel in [Panel::Canvas, Panel::Market, Panel::Deck] {
            let (gw, calls) = counting_gateway();
            let inputs = Inputs { theme: "t".into(), ..Default::default() };
            let out = run(panel, &inputs, &gw).await;
            assert!(matches!(out, PanelOutcome::MissingInput(_)), "{panel:?}");
            assert_eq!(calls.load(Ordering::SeqCst), 0, "{panel:?}");
        }
    }

    #[tokio::test]
    async fn qa_requires_both_idea_and_question() {
        let (gw, calls) = counting_gateway();
        let inputs = Inputs { idea: "an idea".into(), ..Default::default() };
        assert!(matches!(
            run(Panel::Qa, &inputs, &gw).await,
            PanelOutcome::MissingInput(_)
        ));

        let inputs = Inputs { question: "a question".into(), ..Default::default() };
        assert!(matches!(
            run(Panel::Qa, &inputs, &gw).await,
            PanelOutcome::MissingInput(_)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_theme_still_calls_ideas() {
        // Parity with the original tool: the Ideas tab has no blank check.
        let (gw, calls) = counting_gateway();
        let inputs = Inputs::default();
        match run(Panel::Ideas, &inputs, &gw).await {
            PanelOutcome::Completed { prompt, outcome } => {
                assert!(prompt.contains("Based on the theme: ''"));
                assert_eq!(outcome, crate::gateway::Completion::Reply("ok".into()));
            }
            other => panic!("expected a completion, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn populated_inputs_call_exactly_once() {
        let (gw, calls) = counting_gateway();
        let inputs = Inputs {
            theme: "fintech".into(),
            idea: "AI for logistics".into(),
            question: "What is your moat?".into(),
        };
        for panel in Panel::ALL {
            run(panel, &inputs, &gw).await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }
}
