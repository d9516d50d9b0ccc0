//! Error types for form input and shell commands.
//!
//! Registry operations never fail: missing records are reported through
//! return values. Errors only arise where free text crosses into the typed
//! model.

use thiserror::Error;

use crate::form::FormField;

/// Errors raised while editing or submitting the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name does not name one of the five form fields.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value is not one of the options of an enumerated field.
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: FormField, value: String },

    /// A name field was blank while `require_names` is enabled.
    #[error("{0} is required")]
    MissingField(FormField),
}

/// Errors raised while parsing a shell command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid participant id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Form(#[from] FormError),
}
