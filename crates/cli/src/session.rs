//! Interactive form session over stdin.
//!
//! Each input line is one command. Rows are numbered from 1, the same way
//! the placeholders number them.

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use form::view;
use form::{RecommendationFormController, SubmissionState, SubmitOutcome};
use recs_client::RecommendationService;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render::{render_form, render_result};

const HELP: &str = "\
Commands:
  add                 add an empty row
  set <row> <title>   set the title in a row (omit the title to clear it)
  remove <row>        remove a row (row 1 cannot be removed)
  submit              get recommendations for the current titles
  show                show the form and the last result
  help                show this help
  quit                leave";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add,
    Set { index: usize, title: String },
    Remove { index: usize },
    Submit,
    Show,
    Help,
    Quit,
}

/// Parse a command line. Row numbers are 1-based; the returned indices are 0-based.
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "add" => Ok(SessionCommand::Add),
        "set" => {
            let (row, title) = match rest.split_once(char::is_whitespace) {
                Some((row, title)) => (row, title),
                None => (rest, ""),
            };
            Ok(SessionCommand::Set {
                index: parse_row(row)?,
                title: title.to_string(),
            })
        }
        "remove" | "rm" => Ok(SessionCommand::Remove {
            index: parse_row(rest)?,
        }),
        "submit" => Ok(SessionCommand::Submit),
        "show" | "" => Ok(SessionCommand::Show),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => bail!("Unknown command '{}' (try 'help')", other),
    }
}

fn parse_row(text: &str) -> Result<usize> {
    let row: usize = text
        .trim()
        .parse()
        .with_context(|| format!("Expected a row number, got '{}'", text.trim()))?;
    row.checked_sub(1)
        .ok_or_else(|| anyhow!("Rows are numbered from 1"))
}

/// Run the interactive session until `quit`, end of input or Ctrl-C.
pub async fn run<S: RecommendationService>(
    controller: RecommendationFormController<S>,
) -> Result<()> {
    println!("{}", render_form(&controller.snapshot()));
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().yellow());
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        match command {
            SessionCommand::Add => {
                controller.add_entry();
                println!("{}", render_form(&controller.snapshot()));
            }
            SessionCommand::Set { index, title } => match controller.update_entry(index, title) {
                Ok(()) => println!("{}", render_form(&controller.snapshot())),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            SessionCommand::Remove { index } => {
                if !view::can_remove(index) {
                    println!(
                        "{}",
                        format!("Row {} has no {} control", index + 1, view::REMOVE_LABEL).yellow()
                    );
                    continue;
                }
                match controller.remove_entry(index) {
                    Ok(_) => println!("{}", render_form(&controller.snapshot())),
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
            }
            SessionCommand::Submit => {
                if !view::submit_enabled(controller.state()) {
                    println!("{}", "A request is already in flight".yellow());
                    continue;
                }
                println!("{}", view::submit_label(SubmissionState::Loading).dimmed());
                let outcome = tokio::select! {
                    outcome = controller.submit() => outcome,
                    _ = tokio::signal::ctrl_c() => SubmitOutcome::Cancelled,
                };
                if outcome == SubmitOutcome::Cancelled {
                    break;
                }
                print!("{}", render_result(&controller.result()));
            }
            SessionCommand::Show => {
                println!("{}", render_form(&controller.snapshot()));
                print!("{}", render_result(&controller.result()));
            }
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
        }
    }

    controller.close();
    Ok(())
}
