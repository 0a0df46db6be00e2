//! Interactive terminal chat surface.
//!
//! The terminal rendition of the chat page: a transcript, an input line, and
//! the quick-action shortcuts. All conversation state lives in the
//! [`ChatController`]; this module only renders and forwards input.

use anyhow::Result;
use dialoguer::Input;
use std::str::FromStr;

use crate::actions::{self, ActionCategory};
use crate::config::Config;
use crate::conversation::{ChatController, Message, SendOutcome};
use crate::ui::style;

/// Single message mode: send once, print the reply, exit.
pub async fn run_once(config: &Config, message: &str) -> Result<()> {
    let controller = ChatController::from_config(&config.chat);
    render_outcome(&controller.send(message).await);
    Ok(())
}

/// Interactive loop until `/quit`.
pub async fn run_shell(config: &Config) -> Result<()> {
    let controller = ChatController::from_config(&config.chat);

    println!("{}", style::header("TreadGPT"));
    println!(
        "{}",
        style::dim(
            "Type a message. /actions [category] lists shortcuts, /use <id> runs one, /quit exits."
        )
    );
    println!();

    // The configured welcome message, if any, is already in the history.
    if let Some(welcome) = controller.history().first() {
        render_assistant(welcome);
    }

    loop {
        let line: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            "/quit" | "/exit" => break,
            _ if trimmed == "/actions" || trimmed.starts_with("/actions ") => {
                list_actions(trimmed.strip_prefix("/actions").map(str::trim));
            }
            _ if trimmed.starts_with("/use ") => {
                let id = trimmed["/use ".len()..].trim();
                match actions::find(id) {
                    Some(action) => {
                        println!("{} {}", style::dim("sending:"), style::dim(action.prompt));
                        render_outcome(&controller.send_quick_action(action).await);
                    }
                    None => println!("{}", style::warn(format!("unknown action: {id}"))),
                }
            }
            _ => render_outcome(&controller.send(&line).await),
        }
    }

    Ok(())
}

fn list_actions(category: Option<&str>) {
    let filter = match category {
        None | Some("") => None,
        Some(raw) => match ActionCategory::from_str(raw) {
            Ok(category) => Some(category),
            Err(_) => {
                println!("{}", style::warn(format!("unknown category: {raw}")));
                return;
            }
        },
    };
    for action in actions::by_category(filter) {
        println!(
            "  {} {} {}",
            style::accent(action.id),
            style::dim(format!("[{}]", action.category)),
            action.label
        );
    }
}

fn render_outcome(outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Replied { assistant, .. } => render_assistant(assistant),
        SendOutcome::Empty => println!("{}", style::warn("nothing to send")),
        SendOutcome::Busy => println!("{}", style::warn("still replying, hold on")),
    }
}

fn render_assistant(message: &Message) {
    println!("{}", style::bot("treadgpt"));
    println!("{}", message.content);
    if let Some(meta) = &message.metadata {
        println!(
            "{}",
            style::dim(format!(
                "confidence {}% · risk {}",
                meta.confidence, meta.risk_level
            ))
        );
    }
    println!();
}
