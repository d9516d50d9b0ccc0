//! kangoo-report — HTML rendering of the participant registry.
//!
//! Produces the registration page (form and participant list) as a static,
//! self-contained HTML document.

pub mod html;

pub use html::{generate_html, write_html_page};
