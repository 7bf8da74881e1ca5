//! Interactive shell: one command per line, status printed after each.

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};
use watertap_app::events::{NavEvent, UiEvent};
use watertap_app::nav::{NavModifiers, Route};
use watertap_app::{AppRuntime, summary};
use watertap_core::api::{AuthApi, SignupForm};

const HELP: &str = "\
commands:
  login EMAIL PASSWORD
  signup NAME EMAIL PASSWORD
  usage [YYYY-MM-DD]
  go link1|link2 [--hide-back|--show-back]
  back
  logout
  dismiss
  status
  help
  quit";

#[derive(Debug)]
enum ShellCommand {
    Event(UiEvent),
    Usage(Option<NaiveDate>),
    Status,
    Help,
}

fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let parsed = match (command, args.as_slice()) {
        ("login", [email, password]) => ShellCommand::Event(UiEvent::SubmitLogin {
            email: (*email).to_string(),
            password: (*password).to_string(),
        }),
        ("signup", [name, email, password]) => {
            ShellCommand::Event(UiEvent::SubmitSignup(SignupForm {
                name: (*name).to_string(),
                email: (*email).to_string(),
                password: (*password).to_string(),
            }))
        }
        ("usage", []) => ShellCommand::Usage(None),
        ("usage", [date]) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| format!("invalid date `{date}`: {e}"))?;
            ShellCommand::Usage(Some(date))
        }
        ("go", [route, rest @ ..]) => {
            let route: Route = route.parse().map_err(|e| format!("{e}"))?;
            let event = match rest {
                [] => NavEvent::Select(route),
                ["--hide-back"] => NavEvent::SelectWith(route, NavModifiers::hide_back()),
                ["--show-back"] => NavEvent::SelectWith(route, NavModifiers::default()),
                _ => return Err("usage: go link1|link2 [--hide-back|--show-back]".to_string()),
            };
            ShellCommand::Event(UiEvent::Nav(event))
        }
        ("back", []) => ShellCommand::Event(UiEvent::Nav(NavEvent::Pop)),
        ("logout", []) => ShellCommand::Event(UiEvent::Logout),
        ("dismiss", []) => ShellCommand::Event(UiEvent::DismissSignupMessage),
        ("status", []) => ShellCommand::Status,
        ("help", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Event(UiEvent::Quit),
        _ => return Err(format!("unrecognized command `{}` (try `help`)", line.trim())),
    };
    Ok(Some(parsed))
}

pub async fn run(api: impl AuthApi) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut runtime = AppRuntime::new(api);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            print!("watertap> ");
            std::io::stdout().flush().context("flush prompt")?;
        }
        let Some(line) = lines.next_line().await.context("read command")? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("error: {message}");
                continue;
            }
        };

        match command {
            ShellCommand::Event(event) => runtime.dispatch(event),
            ShellCommand::Usage(date) => {
                let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
                runtime.dispatch(UiEvent::RequestUsage { date });
            }
            ShellCommand::Status => {}
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
        }
        runtime.settle().await;

        if runtime.should_quit() {
            break;
        }
        println!("{}", summary::status_text(&runtime.state));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let parsed = parse_line("login gary@example.com pw").unwrap();
        let Some(ShellCommand::Event(UiEvent::SubmitLogin { email, password })) = parsed else {
            panic!("expected a login event");
        };
        assert_eq!(email, "gary@example.com");
        assert_eq!(password, "pw");
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_go_with_modifier() {
        let parsed = parse_line("go link1 --show-back").unwrap();
        assert!(matches!(
            parsed,
            Some(ShellCommand::Event(UiEvent::Nav(NavEvent::SelectWith(
                Route::Link1,
                NavModifiers { hide_back: false }
            ))))
        ));
    }

    #[test]
    fn test_parse_usage_date() {
        let parsed = parse_line("usage 2024-04-18").unwrap();
        let Some(ShellCommand::Usage(Some(date))) = parsed else {
            panic!("expected a usage command");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 18).unwrap());
        assert!(parse_line("usage yesterday").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_line("go link3").is_err());
        assert!(parse_line("login only-email").is_err());
        assert!(parse_line("dance").is_err());
    }
}
