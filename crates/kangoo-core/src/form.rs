//! The registration form.
//!
//! Holds the in-progress field values and, in edit mode, the id of the
//! participant being edited. `submit` either appends a new participant or
//! saves over the edit target, then clears the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::labels;
use crate::model::{Participant, ParticipantFields, ParticipantId};
use crate::registry::ParticipantRegistry;

/// One of the five form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    ShoeSize,
    Club,
    Day,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::ShoeSize,
        FormField::Club,
        FormField::Day,
    ];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => labels::FIRST_NAME,
            FormField::LastName => labels::LAST_NAME,
            FormField::ShoeSize => labels::SHOE_SIZE,
            FormField::Club => labels::CLUB,
            FormField::Day => labels::DAY,
        }
    }

    /// Whether the input is a select over a closed option set.
    pub fn is_enumerated(&self) -> bool {
        matches!(self, FormField::ShoeSize | FormField::Club | FormField::Day)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::FirstName => write!(f, "first_name"),
            FormField::LastName => write!(f, "last_name"),
            FormField::ShoeSize => write!(f, "shoe_size"),
            FormField::Club => write!(f, "club"),
            FormField::Day => write!(f, "day"),
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "firstname" | "first" | "name" => Ok(FormField::FirstName),
            "lastname" | "last" | "surname" => Ok(FormField::LastName),
            "shoesize" | "shoe" | "size" => Ok(FormField::ShoeSize),
            "club" => Ok(FormField::Club),
            "day" => Ok(FormField::Day),
            _ => Err(FormError::UnknownField(s.trim().to_string())),
        }
    }
}

/// What a submit did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new participant was appended.
    Added(ParticipantId),
    /// The edit target was saved. `found` is `false` when the target had
    /// been deleted in the meantime and nothing changed.
    Saved { id: ParticipantId, found: bool },
}

/// Current form contents plus the edit target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: ParticipantFields,
    editing: Option<ParticipantId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ParticipantFields {
        &self.fields
    }

    /// Id of the participant being edited, if in edit mode.
    pub fn editing(&self) -> Option<ParticipantId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// `Добавить` when adding, `Сохранить` when editing.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            labels::SAVE
        } else {
            labels::ADD
        }
    }

    /// Store an input value.
    ///
    /// Text fields take the raw value as-is. Enumerated fields accept the
    /// empty string (unset) or one of their options; anything else is
    /// rejected and the form is left unchanged.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        let unknown = |_| FormError::UnknownOption {
            field,
            value: raw.trim().to_string(),
        };
        match field {
            FormField::FirstName => self.fields.first_name = raw.to_string(),
            FormField::LastName => self.fields.last_name = raw.to_string(),
            FormField::ShoeSize => self.fields.shoe_size = raw.parse().map_err(unknown)?,
            FormField::Club => self.fields.club = raw.parse().map_err(unknown)?,
            FormField::Day => self.fields.day = raw.parse().map_err(unknown)?,
        }
        Ok(())
    }

    /// Current value of a field as text (days by display label).
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FirstName => self.fields.first_name.clone(),
            FormField::LastName => self.fields.last_name.clone(),
            FormField::ShoeSize => self.fields.shoe_size.to_string(),
            FormField::Club => self.fields.club.to_string(),
            FormField::Day => self.fields.day.to_string(),
        }
    }

    /// Enter edit mode for `participant`, copying its fields into the form.
    pub fn begin_edit(&mut self, participant: &Participant) {
        self.editing = Some(participant.id);
        self.fields = participant.fields.clone();
        tracing::debug!(id = %participant.id, "editing participant");
    }

    /// Name fields that are blank (whitespace only counts as blank).
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.fields.first_name.trim().is_empty() {
            missing.push(FormField::FirstName);
        }
        if self.fields.last_name.trim().is_empty() {
            missing.push(FormField::LastName);
        }
        missing
    }

    /// Add or save, then reset every field and leave edit mode.
    pub fn submit(&mut self, registry: &mut ParticipantRegistry) -> SubmitOutcome {
        let fields = std::mem::take(&mut self.fields);
        match self.editing.take() {
            Some(id) => {
                let found = registry.update(id, fields);
                SubmitOutcome::Saved { id, found }
            }
            None => SubmitOutcome::Added(registry.add(fields)),
        }
    }
}
