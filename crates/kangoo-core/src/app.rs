//! The registry component: one form bound to one participant list.
//!
//! `ParticipantApp` owns both pieces of state. Every user interaction is an
//! [`Action`]; `apply` runs it to completion and reports what changed.

use serde::{Deserialize, Serialize};

use crate::config::KangooConfig;
use crate::error::FormError;
use crate::form::{FormField, FormState, SubmitOutcome};
use crate::model::{Participant, ParticipantFields, ParticipantId};
use crate::registry::ParticipantRegistry;

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Type into or select a value in one input.
    SetField { field: FormField, value: String },
    /// Press the Add / Save button.
    Submit,
    /// Press Edit on a list row.
    Edit { id: ParticipantId },
    /// Press Delete on a list row.
    Delete { id: ParticipantId },
}

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    FieldSet(FormField),
    Added(ParticipantId),
    Saved { id: ParticipantId, found: bool },
    EditStarted(ParticipantId),
    /// Edit pressed for an id that is not in the list; nothing changed.
    EditTargetMissing(ParticipantId),
    Deleted(ParticipantId),
    /// Delete pressed for an id that is not in the list; nothing changed.
    DeleteMissed(ParticipantId),
}

impl ActionOutcome {
    /// `true` if the participant list changed.
    pub fn changed_list(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Added(_)
                | ActionOutcome::Saved { found: true, .. }
                | ActionOutcome::Deleted(_)
        )
    }
}

impl From<SubmitOutcome> for ActionOutcome {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Added(id) => ActionOutcome::Added(id),
            SubmitOutcome::Saved { id, found } => ActionOutcome::Saved { id, found },
        }
    }
}

/// Serializable projection of the whole component.
#[derive(Debug, Clone, Serialize)]
pub struct AppView<'a> {
    pub editing: Option<ParticipantId>,
    pub submit_label: &'static str,
    pub form: &'a ParticipantFields,
    pub participants: &'a [Participant],
}

/// Form and participant list, wired together.
#[derive(Debug, Clone, Default)]
pub struct ParticipantApp {
    form: FormState,
    registry: ParticipantRegistry,
    require_names: bool,
}

impl ParticipantApp {
    pub fn new(config: &KangooConfig) -> Self {
        Self {
            form: FormState::new(),
            registry: ParticipantRegistry::new(config.id_policy),
            require_names: config.require_names,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    pub fn participants(&self) -> &[Participant] {
        self.registry.all()
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        self.form.set_field(field, value).inspect_err(|e| {
            tracing::debug!(%field, "rejected input: {e}");
        })
    }

    /// Add or save from the form.
    ///
    /// With `require_names` enabled a blank first or last name is rejected
    /// and the form keeps its contents; otherwise submit always succeeds.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.require_names {
            if let Some(&field) = self.form.missing_fields().first() {
                tracing::debug!(%field, "submit rejected, field is blank");
                return Err(FormError::MissingField(field));
            }
        }
        Ok(self.form.submit(&mut self.registry))
    }

    /// Start editing the participant with `id`. Returns `false` if absent.
    pub fn begin_edit(&mut self, id: ParticipantId) -> bool {
        match self.registry.get(id) {
            Some(participant) => {
                let participant = participant.clone();
                self.form.begin_edit(&participant);
                true
            }
            None => {
                tracing::debug!(%id, "edit target not found, ignoring");
                false
            }
        }
    }

    /// Delete the participant with `id`. Returns `false` if absent.
    pub fn delete(&mut self, id: ParticipantId) -> bool {
        self.registry.remove(id)
    }

    /// Run one action to completion.
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome, FormError> {
        let outcome = match action {
            Action::SetField { field, value } => {
                self.set_field(*field, value)?;
                ActionOutcome::FieldSet(*field)
            }
            Action::Submit => self.submit()?.into(),
            Action::Edit { id } => {
                if self.begin_edit(*id) {
                    ActionOutcome::EditStarted(*id)
                } else {
                    ActionOutcome::EditTargetMissing(*id)
                }
            }
            Action::Delete { id } => {
                if self.delete(*id) {
                    ActionOutcome::Deleted(*id)
                } else {
                    ActionOutcome::DeleteMissed(*id)
                }
            }
        };
        Ok(outcome)
    }

    pub fn view(&self) -> AppView<'_> {
        AppView {
            editing: self.form.editing(),
            submit_label: self.form.submit_label(),
            form: self.form.fields(),
            participants: self.registry.all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Club;
    use crate::registry::IdPolicy;

    fn set(field: FormField, value: &str) -> Action {
        Action::SetField {
            field,
            value: value.into(),
        }
    }

    fn register(app: &mut ParticipantApp, first: &str, club: &str) -> ParticipantId {
        app.apply(&set(FormField::FirstName, first)).unwrap();
        app.apply(&set(FormField::Club, club)).unwrap();
        match app.apply(&Action::Submit).unwrap() {
            ActionOutcome::Added(id) => id,
            other => panic!("expected Added, got {other:?}"),
        }
    }

    fn ids(app: &ParticipantApp) -> Vec<u32> {
        app.participants().iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn sequential_adds_get_ids_one_and_two() {
        let mut app = ParticipantApp::default();
        assert_eq!(register(&mut app, "Anna", "Tilesno"), ParticipantId(1));
        assert_eq!(register(&mut app, "Olga", "Amplua"), ParticipantId(2));
        assert_eq!(ids(&app), vec![1, 2]);
    }

    #[test]
    fn edit_changes_club_and_keeps_id() {
        let mut app = ParticipantApp::default();
        register(&mut app, "Anna", "Tilesno");

        assert_eq!(
            app.apply(&Action::Edit { id: ParticipantId(1) }).unwrap(),
            ActionOutcome::EditStarted(ParticipantId(1))
        );
        assert_eq!(app.form().value(FormField::FirstName), "Anna");

        app.apply(&set(FormField::Club, "Amplua")).unwrap();
        let outcome = app.apply(&Action::Submit).unwrap();
        assert!(outcome.changed_list());

        assert_eq!(ids(&app), vec![1]);
        assert_eq!(app.participants()[0].fields.club, Club::Amplua);
        assert_eq!(app.participants()[0].fields.first_name, "Anna");
    }

    #[test]
    fn delete_and_missing_ids() {
        let mut app = ParticipantApp::default();
        register(&mut app, "Anna", "Tilesno");
        register(&mut app, "Olga", "Amplua");

        assert_eq!(
            app.apply(&Action::Delete { id: ParticipantId(1) }).unwrap(),
            ActionOutcome::Deleted(ParticipantId(1))
        );
        assert_eq!(ids(&app), vec![2]);

        let missed = app.apply(&Action::Delete { id: ParticipantId(99) }).unwrap();
        assert_eq!(missed, ActionOutcome::DeleteMissed(ParticipantId(99)));
        assert!(!missed.changed_list());
        assert_eq!(ids(&app), vec![2]);

        assert_eq!(
            app.apply(&Action::Edit { id: ParticipantId(1) }).unwrap(),
            ActionOutcome::EditTargetMissing(ParticipantId(1))
        );
        assert!(!app.form().is_editing());
    }

    #[test]
    fn id_reuse_depends_on_policy() {
        let legacy = KangooConfig {
            id_policy: IdPolicy::LengthPlusOne,
            ..Default::default()
        };
        let mut app = ParticipantApp::new(&legacy);
        register(&mut app, "a", "");
        register(&mut app, "b", "");
        app.delete(ParticipantId(1));
        assert_eq!(register(&mut app, "c", ""), ParticipantId(2));
        assert_eq!(ids(&app), vec![2, 2]);

        let mut app = ParticipantApp::new(&KangooConfig::default());
        register(&mut app, "a", "");
        register(&mut app, "b", "");
        app.delete(ParticipantId(1));
        assert_eq!(register(&mut app, "c", ""), ParticipantId(3));
        assert_eq!(ids(&app), vec![2, 3]);
    }

    #[test]
    fn require_names_rejects_blank_submit() {
        let strict = KangooConfig {
            require_names: true,
            ..Default::default()
        };
        let mut app = ParticipantApp::new(&strict);
        app.apply(&set(FormField::FirstName, "Anna")).unwrap();
        app.apply(&set(FormField::Club, "Tilesno")).unwrap();

        let err = app.apply(&Action::Submit).unwrap_err();
        assert_eq!(err, FormError::MissingField(FormField::LastName));
        assert!(app.participants().is_empty());
        assert_eq!(app.form().value(FormField::FirstName), "Anna");

        app.apply(&set(FormField::LastName, "K")).unwrap();
        assert_eq!(
            app.apply(&Action::Submit).unwrap(),
            ActionOutcome::Added(ParticipantId(1))
        );
    }

    #[test]
    fn rejected_option_is_an_error() {
        let mut app = ParticipantApp::default();
        let err = app.apply(&set(FormField::ShoeSize, "XL")).unwrap_err();
        assert!(matches!(err, FormError::UnknownOption { .. }));
    }

    #[test]
    fn view_serializes_form_and_list() {
        let mut app = ParticipantApp::default();
        register(&mut app, "Anna", "Tilesno");
        app.begin_edit(ParticipantId(1));

        let json = serde_json::to_value(app.view()).unwrap();
        assert_eq!(json["editing"], 1);
        assert_eq!(json["submit_label"], "Сохранить");
        assert_eq!(json["form"]["first_name"], "Anna");
        assert_eq!(json["participants"][0]["club"], "Tilesno");
    }

    #[test]
    fn action_deserializes_from_tagged_form() {
        let action: Action =
            serde_json::from_str(r#"{"action":"set_field","field":"club","value":"Amplua"}"#)
                .unwrap();
        assert_eq!(action, set(FormField::Club, "Amplua"));
        let action: Action = serde_json::from_str(r#"{"action":"delete","id":3}"#).unwrap();
        assert_eq!(action, Action::Delete { id: ParticipantId(3) });
    }
}
