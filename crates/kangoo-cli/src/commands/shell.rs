//! The `kangoo shell` command.
//!
//! Reads one command per line and applies it to a fresh registry. Command
//! errors are reported and the session carries on; end of input ends it.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;

use kangoo_core::config::load_config_from;
use kangoo_core::{Action, ActionOutcome, CommandError, FormField, ParticipantApp, ParticipantId};

use crate::view;

const HELP: &str = "\
Commands:
  set <field> [value]   fill an input (first_name, last_name, shoe_size, club, day)
  submit | add | save   press the Add / Save button
  edit <id>             load a participant into the form
  delete <id> | rm <id> remove a participant
  list                  show the form and the participant list
  help                  show this help
  quit | exit           leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Apply(Action),
    List,
    Help,
    Quit,
}

fn parse_id(command: &'static str, arg: &str) -> Result<ParticipantId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "<id>",
        });
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

/// Parse a line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let command = match word.to_lowercase().as_str() {
        "set" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    expected: "<field> [value]",
                });
            }
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f, v.trim()))
                .unwrap_or((rest, ""));
            let field: FormField = field.parse()?;
            ShellCommand::Apply(Action::SetField {
                field,
                value: value.to_string(),
            })
        }
        "submit" | "add" | "save" => ShellCommand::Apply(Action::Submit),
        "edit" => ShellCommand::Apply(Action::Edit {
            id: parse_id("edit", rest)?,
        }),
        "delete" | "rm" => ShellCommand::Apply(Action::Delete {
            id: parse_id("delete", rest)?,
        }),
        "list" | "show" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(CommandError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn describe(outcome: ActionOutcome) -> Option<String> {
    match outcome {
        ActionOutcome::FieldSet(_) => None,
        ActionOutcome::Added(id) => Some(format!("Added participant #{id}.")),
        ActionOutcome::Saved { id, found: true } => Some(format!("Saved participant #{id}.")),
        ActionOutcome::Saved { id, found: false } => Some(format!(
            "Participant #{id} no longer exists, nothing saved."
        )),
        ActionOutcome::EditStarted(id) => Some(format!("Editing participant #{id}.")),
        ActionOutcome::EditTargetMissing(id) | ActionOutcome::DeleteMissed(id) => {
            Some(format!("No participant with id {id}."))
        }
        ActionOutcome::Deleted(id) => Some(format!("Deleted participant #{id}.")),
    }
}

/// Run a shell session over arbitrary input and output.
fn run_session<R: BufRead, W: Write>(
    app: &mut ParticipantApp,
    input: R,
    out: &mut W,
    color: bool,
    prompt: bool,
) -> Result<()> {
    writeln!(out, "{}", kangoo_core::labels::TITLE)?;
    writeln!(out, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "kangoo> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Apply(action) => match app.apply(&action) {
                Ok(outcome) => {
                    if let Some(message) = describe(outcome) {
                        writeln!(out, "{message}")?;
                    }
                    if matches!(
                        outcome,
                        ActionOutcome::Added(_)
                            | ActionOutcome::Saved { .. }
                            | ActionOutcome::EditStarted(_)
                            | ActionOutcome::Deleted(_)
                    ) {
                        write!(out, "{}", view::render(app, color))?;
                    }
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            ShellCommand::List => write!(out, "{}", view::render(app, color))?,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }

    tracing::debug!(participants = app.participants().len(), "shell session ended");
    Ok(())
}

pub fn execute(config_path: Option<PathBuf>, no_color: bool) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut app = ParticipantApp::new(&config);

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout().lock();
    run_session(
        &mut app,
        stdin.lock(),
        &mut stdout,
        config.color && !no_color,
        prompt,
    )
}
