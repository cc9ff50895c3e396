use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::gateway::Completion;
use crate::panel::Panel;

pub fn banner() {
    println!("\n{}", "Foundry AI - Your Startup Co-Pilot".bold());
    println!("Build, validate, and pitch your next startup - in minutes.\n");
}

pub fn read_line(label: &str) -> String {
    print!("{}: ", label.bold());
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        s.trim().to_string()
    } else {
        String::new()
    }
}

/// Menu of the five panels plus session commands. Returns `None` on quit.
pub fn pick_action(theme: &str, idea: &str) -> Option<MenuAction> {
    println!("{}", "=== PANELS ===".bold());
    for (i, p) in Panel::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, p.title());
    }
    println!("t. Edit theme   (current: {})", preview(theme));
    println!("i. Edit idea    (current: {})", preview(idea));
    println!("q. Quit");

    loop {
        let choice = read_line("Select");
        match choice.as_str() {
            "1" => return Some(MenuAction::Run(Panel::Ideas)),
            "2" => return Some(MenuAction::Run(Panel::Canvas)),
            "3" => return Some(MenuAction::Run(Panel::Market)),
            "4" => return Some(MenuAction::Run(Panel::Deck)),
            "5" => return Some(MenuAction::Run(Panel::Qa)),
            "t" => return Some(MenuAction::EditTheme),
            "i" => return Some(MenuAction::EditIdea),
            "q" | "quit" | "exit" => return None,
            _ => println!("{}", "Unrecognized choice.".yellow()),
        }
    }
}

pub enum MenuAction {
    Run(Panel),
    EditTheme,
    EditIdea,
}

fn preview(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".to_string();
    }
    if s.chars().count() > 40 {
        let head: String = s.chars().take(40).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

pub fn spinner(enabled: bool, panel: Panel) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("{}...", panel.title()));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

pub fn print_missing_input(message: &str) {
    println!("{}", message.red().bold());
}

pub fn print_completion(panel: Panel, outcome: &Completion) {
    println!("\n=== {} ===", panel.title().bold());
    match outcome {
        Completion::Reply(text) => println!("{text}\n"),
        Completion::Failed(_) => println!("{}\n", outcome.render().red()),
    }
}
