//! kangoo-core — Participant model, form controller, and registry.
//!
//! This crate holds everything the kangoo registry does: the participant
//! data model, the form that edits it, the ordered collection it lives in,
//! the accent lookups used for display, configuration, and session scripts.

pub mod accent;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod labels;
pub mod model;
pub mod registry;
pub mod script;

pub use app::{Action, ActionOutcome, AppView, ParticipantApp};
pub use config::{load_config_from, KangooConfig};
pub use error::{CommandError, FormError};
pub use form::{FormField, FormState, SubmitOutcome};
pub use model::{Club, Day, Participant, ParticipantFields, ParticipantId, ShoeSize};
pub use registry::{IdPolicy, ParticipantRegistry};
