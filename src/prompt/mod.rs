//! Prompt templates for the five panels.
//!
//! Each function substitutes raw user text into a fixed instruction string.
//! No normalization or escaping happens here; blank-input checks are the
//! caller's job (see `panel`).

pub fn startup_ideas(theme: &str) -> String {
    format!(
        "Based on the theme: '{theme}', generate 3 innovative startup ideas with a one-line description."
    )
}

pub fn lean_canvas(idea: &str) -> String {
    format!(
        "Generate a Lean Canvas for this startup idea: {idea}. Include Problem, Solution, Metrics, Channels, Revenue, Cost, Unfair Advantage, and Customer Segments."
    )
}

pub fn market_validation(idea: &str) -> String {
    format!(
        "Perform market validation for the idea: {idea}. Include market size, trends, risks, and competition."
    )
}

pub fn pitch_deck(idea: &str) -> String {
    format!(
        "Create a 9-slide investor pitch deck outline for this idea: {idea}. Use Problem, Solution, Market, Product, Business Model, Traction, Team, Financials, Ask."
    )
}

pub fn investor_qa(question: &str, idea: &str) -> String {
    format!(
        "An investor asks: '{question}' about the startup: {idea}. Provide a confident, founder-style answer."
    )
}
