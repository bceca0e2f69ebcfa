//! Terminal front end for a [`SessionClient`].

use edubot_core::{EdubotError, Message, ProviderId, Role};
use edubot_session::SessionClient;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const HELP: &str = "\
Commands:
  /model <id>     switch model (gemini, groq, cohere, huggingface, wikipedia, chatgpt, claude)
  /prompts        show starter questions
  /status         show connection status
  /copy           print the latest answer on its own
  /export <path>  save the conversation as plain text
  /reset          start a new conversation
  /quit           leave";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Model(String),
    Prompts,
    Status,
    Copy,
    Export(PathBuf),
    Reset,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match (name, arg) {
        ("quit" | "exit" | "q", _) => Command::Quit,
        ("help" | "?", _) => Command::Help,
        ("reset" | "new", _) => Command::Reset,
        ("status", _) => Command::Status,
        ("prompts", _) => Command::Prompts,
        ("copy", _) => Command::Copy,
        ("export", "") => Command::Export(PathBuf::from("edubot-chat.txt")),
        ("export", path) => Command::Export(PathBuf::from(path)),
        ("model", id) if !id.is_empty() => Command::Model(id.to_string()),
        _ => Command::Unknown(line.to_string()),
    }
}

/// Renders a transcript entry for the terminal.
pub fn render(message: &Message) -> String {
    match (message.role, &message.provider, message.mode) {
        (Role::User, _, _) => format!("you> {}", message.content),
        (_, Some(provider), Some(mode)) => {
            format!("edubot [{provider}, {}]> {}", mode.as_str(), message.content)
        }
        _ => format!("edubot> {}", message.content),
    }
}

/// Runs the read-ask-print loop until `/quit` or end of input.
pub async fn run(session: &SessionClient, mut model: String) -> anyhow::Result<()> {
    for message in session.transcript() {
        println!("{}\n", render(&message));
    }
    println!(
        "[{}] {}  (model: {model}, /help for commands)",
        session.health().label(),
        session.health().message()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Ask(question) => match session.submit_question(&question, &model).await {
                Ok(reply) => println!("{}\n", render(&reply)),
                Err(EdubotError::Busy) => println!("Still waiting for the previous answer."),
                Err(e) => println!("{}", e.detail()),
            },
            Command::Model(id) => match id.parse::<ProviderId>() {
                Ok(id) => {
                    model = id.as_str().to_string();
                    println!("Model set to {} ({}).", id.display_name(), model);
                }
                Err(e) => println!("{}", e.detail()),
            },
            Command::Prompts => {
                for (i, prompt) in session.load_prompts().await.iter().enumerate() {
                    println!("  {}. {prompt}", i + 1);
                }
            }
            Command::Status => {
                session.poll_health().await;
                println!("[{}] {}", session.health().label(), session.health().message());
            }
            Command::Copy => match session.latest_answer() {
                Some(answer) => println!("{answer}"),
                None => println!("No answer yet."),
            },
            Command::Export(path) => match tokio::fs::write(&path, session.export_text()).await {
                Ok(()) => println!("Conversation saved to {}.", path.display()),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Export failed");
                    println!("Could not save conversation: {e}");
                }
            },
            Command::Reset => {
                session.reset_transcript().await;
                println!("Started a new conversation.\n");
                if let Some(welcome) = session.transcript().first() {
                    println!("{}\n", render(welcome));
                }
            }
            Command::Unknown(text) => println!("Unknown command: {text}. Type /help."),
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use edubot_core::Mode;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(
            parse_line("  How do fractions work?  "),
            Command::Ask("How do fractions work?".into())
        );
        assert_eq!(parse_line("   "), Command::Empty);
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line("/reset"), Command::Reset);
        assert_eq!(parse_line("/model groq"), Command::Model("groq".into()));
        assert_eq!(
            parse_line("/export notes/chat.txt"),
            Command::Export(PathBuf::from("notes/chat.txt"))
        );
        assert_eq!(
            parse_line("/export"),
            Command::Export(PathBuf::from("edubot-chat.txt"))
        );
        assert_eq!(parse_line("/model"), Command::Unknown("/model".into()));
        assert_eq!(parse_line("/dance"), Command::Unknown("/dance".into()));
    }

    #[test]
    fn test_render_tags_assistant_source() {
        let reply = Message::assistant("Use a loop.", "groq", Mode::Live);
        assert_eq!(render(&reply), "edubot [groq, live]> Use a loop.");
        assert_eq!(render(&Message::user("hi")), "you> hi");
        assert!(render(&Message::welcome()).starts_with("edubot> "));
    }
}
