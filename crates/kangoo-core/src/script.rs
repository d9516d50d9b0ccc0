//! TOML session scripts.
//!
//! A session script is a recorded sequence of form interactions. Scripts are
//! replayed against a fresh [`ParticipantApp`] by the CLI, and can be
//! validated with a dry run that reports suspicious steps.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::app::{Action, ActionOutcome, ParticipantApp};
use crate::config::KangooConfig;
use crate::form::FormField;
use crate::model::ParticipantId;

/// Intermediate TOML structure for parsing script files.
#[derive(Debug, Deserialize)]
struct TomlScriptFile {
    session: TomlSessionHeader,
    #[serde(default)]
    steps: Vec<TomlStep>,
}

#[derive(Debug, Deserialize)]
struct TomlSessionHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum TomlStep {
    Set {
        field: String,
        #[serde(default)]
        value: String,
    },
    Fill {
        #[serde(default)]
        first_name: Option<String>,
        #[serde(default)]
        last_name: Option<String>,
        #[serde(default)]
        shoe_size: Option<String>,
        #[serde(default)]
        club: Option<String>,
        #[serde(default)]
        day: Option<String>,
    },
    Submit,
    Edit {
        id: u32,
    },
    Delete {
        id: u32,
    },
}

/// One action of a script, tagged with the 1-based step it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub step: usize,
    pub action: Action,
}

/// A parsed session script.
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub description: String,
    /// Actions in order. A `fill` step expands into one action per field.
    pub steps: Vec<ScriptStep>,
    source_steps: usize,
    empty_fills: Vec<usize>,
}

impl Script {
    /// Number of steps in the source file.
    pub fn step_count(&self) -> usize {
        self.source_steps
    }

    /// Replay every action against `app`, stopping at the first rejected input.
    pub fn replay(&self, app: &mut ParticipantApp) -> Result<Vec<ActionOutcome>> {
        self.steps
            .iter()
            .map(|s| {
                app.apply(&s.action)
                    .with_context(|| format!("step {} of '{}'", s.step, self.name))
            })
            .collect()
    }
}

/// Parse a single TOML script file.
pub fn parse_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script file: {}", path.display()))?;

    parse_script_str(&content, path)
}

/// Parse a TOML string into a `Script` (useful for testing).
pub fn parse_script_str(content: &str, source_path: &Path) -> Result<Script> {
    let parsed: TomlScriptFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let source_steps = parsed.steps.len();
    let mut steps = Vec::new();
    let mut empty_fills = Vec::new();
    for (i, step) in parsed.steps.into_iter().enumerate() {
        let step_no = i + 1;
        let mut push = |action| {
            steps.push(ScriptStep {
                step: step_no,
                action,
            })
        };
        match step {
            TomlStep::Set { field, value } => {
                let field: FormField = field
                    .parse()
                    .with_context(|| format!("step {step_no}: bad field"))?;
                push(Action::SetField { field, value });
            }
            TomlStep::Fill {
                first_name,
                last_name,
                shoe_size,
                club,
                day,
            } => {
                let values = [first_name, last_name, shoe_size, club, day];
                if values.iter().all(Option::is_none) {
                    empty_fills.push(step_no);
                }
                for (field, value) in FormField::ALL.into_iter().zip(values) {
                    if let Some(value) = value {
                        push(Action::SetField { field, value });
                    }
                }
            }
            TomlStep::Submit => push(Action::Submit),
            TomlStep::Edit { id } => push(Action::Edit {
                id: ParticipantId(id),
            }),
            TomlStep::Delete { id } => push(Action::Delete {
                id: ParticipantId(id),
            }),
        }
    }

    tracing::info!(
        "parsed script '{}' ({} actions)",
        parsed.session.name,
        steps.len()
    );

    Ok(Script {
        name: parsed.session.name,
        description: parsed.session.description,
        steps,
        source_steps,
        empty_fills,
    })
}

/// A warning from script validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The step number (if applicable).
    pub step: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Dry-run a script against a fresh app and report suspicious steps.
pub fn validate_script(script: &Script, config: &KangooConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut app = ParticipantApp::new(config);

    if script.step_count() == 0 {
        warnings.push(ValidationWarning {
            step: None,
            message: "script has no steps".into(),
        });
        return warnings;
    }

    for &step in &script.empty_fills {
        warnings.push(ValidationWarning {
            step: Some(step),
            message: "fill step sets no fields".into(),
        });
    }

    for s in &script.steps {
        let warn = |message: String| ValidationWarning {
            step: Some(s.step),
            message,
        };

        if s.action == Action::Submit && !config.require_names {
            let missing = app.form().missing_fields();
            if !missing.is_empty() {
                let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
                warnings.push(warn(format!("submit with blank {}", names.join(", "))));
            }
        }

        match app.apply(&s.action) {
            Ok(ActionOutcome::EditTargetMissing(id)) => {
                warnings.push(warn(format!("edit of id {id}, which is not in the list")));
            }
            Ok(ActionOutcome::DeleteMissed(id)) => {
                warnings.push(warn(format!("delete of id {id}, which is not in the list")));
            }
            Ok(ActionOutcome::Saved { id, found: false }) => {
                warnings.push(warn(format!("save of id {id}, which was deleted while editing")));
            }
            Ok(_) => {}
            Err(e) => warnings.push(warn(e.to_string())),
        }
    }

    if app.form().is_editing() || !app.form().fields().is_blank() {
        warnings.push(ValidationWarning {
            step: None,
            message: "form input left unsubmitted at end of script".into(),
        });
    }

    warnings
}
