//! Line-oriented front end for the headless host.
//!
//! Reads one command per line and prints one JSON object per result on
//! stdout: `{"ok": ...}` or `{"error": "..."}`. Notices published by the
//! dashboard are printed as `{"notice": ...}` as they arrive.

use std::time::Duration;

use agrimitra_core::notice::Notice;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::AppState;
use crate::commands;

pub const HELP: &str = "\
login <username> <password>   submit the login form
edit <crop|soilType|area> <value>
language <english|hindi|punjabi|bengali>
locate                        request the current location
voice                         toggle the voice assistant
tab <home|field|recommend|insights>
done | save                   recommendation actions
screen [wide|narrow]          print the current screen
state                         print the app state
notices                       print recent notices
config                        print the loaded configuration
wait <ms>                     let background work progress
help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Login { username: String, password: String },
    Edit { field: String, value: String },
    Language(String),
    Locate,
    Voice,
    Tab(String),
    MarkDone,
    Save,
    Screen(Option<String>),
    State,
    Notices,
    Config,
    Wait(Duration),
    Help,
    Quit,
}

/// Parses one input line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match verb.to_ascii_lowercase().as_str() {
        // Missing credentials are passed through so the login form can reject them.
        "login" => ConsoleCommand::Login {
            username: args.next().unwrap_or_default().to_string(),
            password: args.next().unwrap_or_default().to_string(),
        },
        "edit" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err("Usage: edit <field> <value>".to_string());
            }
            ConsoleCommand::Edit {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "language" | "lang" => ConsoleCommand::Language(required(args.next(), "language")?),
        "locate" => ConsoleCommand::Locate,
        "voice" => ConsoleCommand::Voice,
        "tab" => ConsoleCommand::Tab(required(args.next(), "tab")?),
        "done" => ConsoleCommand::MarkDone,
        "save" => ConsoleCommand::Save,
        "screen" => ConsoleCommand::Screen(args.next().map(str::to_string)),
        "state" => ConsoleCommand::State,
        "notices" => ConsoleCommand::Notices,
        "config" => ConsoleCommand::Config,
        "wait" => {
            let ms = required(args.next(), "milliseconds")?;
            let ms: u64 = ms
                .parse()
                .map_err(|_| format!("Invalid duration: {}", ms))?;
            ConsoleCommand::Wait(Duration::from_millis(ms))
        }
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(Some(command))
}

fn required(arg: Option<&str>, name: &str) -> Result<String, String> {
    arg.map(str::to_string)
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Runs one command against the host state.
pub async fn execute(state: &AppState, command: ConsoleCommand) -> Result<Value, String> {
    match command {
        ConsoleCommand::Login { username, password } => {
            commands::login(state, username, password).await?;
            Ok(json!("logged in"))
        }
        ConsoleCommand::Edit { field, value } => {
            to_json(commands::edit_field(state, field, value).await?)
        }
        ConsoleCommand::Language(language) => {
            to_json(commands::select_language(state, language).await?)
        }
        ConsoleCommand::Locate => {
            commands::request_location(state).await?;
            Ok(json!("location requested"))
        }
        ConsoleCommand::Voice => to_json(commands::toggle_voice(state).await?),
        ConsoleCommand::Tab(tab) => to_json(commands::select_tab(state, tab).await?),
        ConsoleCommand::MarkDone => to_json(commands::mark_done(state).await?),
        ConsoleCommand::Save => to_json(commands::save_recommendations(state).await?),
        ConsoleCommand::Screen(layout) => to_json(commands::get_screen(state, layout).await?),
        ConsoleCommand::State => to_json(commands::get_app_state(state).await?),
        ConsoleCommand::Notices => to_json(commands::recent_notices(state).await?),
        ConsoleCommand::Config => to_json(commands::get_config(state).await?),
        ConsoleCommand::Wait(duration) => {
            tokio::time::sleep(duration).await;
            Ok(json!({ "waitedMs": duration.as_millis() as u64 }))
        }
        ConsoleCommand::Help => Ok(json!(HELP)),
        ConsoleCommand::Quit => Ok(json!("bye")),
    }
}

/// Reads commands from `input` until EOF or `quit`.
pub async fn run<R>(
    state: AppState,
    mut notices: UnboundedReceiver<Notice>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let printer = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            println!("{}", json!({ "notice": notice }));
        }
    });

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", json!({ "error": e }));
                continue;
            }
        };

        let quit = command == ConsoleCommand::Quit;
        match execute(&state, command).await {
            Ok(value) => println!("{}", json!({ "ok": value })),
            Err(e) => println!("{}", json!({ "error": e })),
        }
        if quit {
            break;
        }
    }

    tracing::info!("[Console] Input closed, shutting down");
    printer.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::app_with_config;

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse_line("login ramesh secret").unwrap(),
            Some(ConsoleCommand::Login {
                username: "ramesh".to_string(),
                password: "secret".to_string(),
            })
        );
        assert_eq!(
            parse_line("login ramesh").unwrap(),
            Some(ConsoleCommand::Login {
                username: "ramesh".to_string(),
                password: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_edit_keeps_spaces_in_value() {
        assert_eq!(
            parse_line("edit area 2 hectares").unwrap(),
            Some(ConsoleCommand::Edit {
                field: "area".to_string(),
                value: "2 hectares".to_string(),
            })
        );
        assert!(parse_line("edit").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# comment").unwrap(), None);
        assert_eq!(
            parse_line("screen narrow").unwrap(),
            Some(ConsoleCommand::Screen(Some("narrow".to_string())))
        );
        assert_eq!(
            parse_line("WAIT 2500").unwrap(),
            Some(ConsoleCommand::Wait(Duration::from_millis(2500)))
        );
        assert!(parse_line("wait soon").is_err());
        assert!(parse_line("tab").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_walkthrough() {
        let (app, _notices) = app_with_config("").await;

        let locked = execute(&app, ConsoleCommand::Screen(None)).await.unwrap();
        assert_eq!(locked["type"], "Login");

        execute(
            &app,
            ConsoleCommand::Login {
                username: "ramesh".to_string(),
                password: "secret".to_string(),
            },
        )
        .await
        .unwrap();

        let mode = execute(&app, ConsoleCommand::Voice).await.unwrap();
        assert_eq!(mode, json!("Listening"));
        execute(&app, ConsoleCommand::Wait(Duration::from_millis(3000)))
            .await
            .unwrap();

        let state = execute(&app, ConsoleCommand::State).await.unwrap();
        assert_eq!(state["voice"]["mode"], "Idle");
        assert_eq!(
            state["voice"]["message"],
            "Suggested Tip: Irrigate wheat fields in the morning to retain moisture."
        );
    }
}
