//! Display accents for clubs and days.
//!
//! Every club and day maps to at most one accent through an explicit table;
//! the unset variants and unknown strings map to no accent.

use std::fmt;

use crate::model::{Club, Day};

/// A display color used to group participants visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
}

impl Accent {
    /// The color token, e.g. `"blue"`.
    pub fn token(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Red => "red",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
        }
    }

    /// The text color class used on the HTML page.
    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-blue",
            Accent::Green => "text-green",
            Accent::Red => "text-red",
            Accent::Orange => "text-orange",
            Accent::Purple => "text-purple",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Club {
    pub fn accent(&self) -> Option<Accent> {
        match self {
            Club::Tilesno => Some(Accent::Blue),
            Club::Amplua => Some(Accent::Green),
            Club::Unset => None,
        }
    }
}

impl Day {
    pub fn accent(&self) -> Option<Accent> {
        match self {
            Day::Monday => Some(Accent::Red),
            Day::Wednesday => Some(Accent::Orange),
            Day::Friday => Some(Accent::Purple),
            Day::Unset => None,
        }
    }
}

/// Accent for a raw club value. Unknown values have no accent.
pub fn club_accent(value: &str) -> Option<Accent> {
    value.parse::<Club>().ok().and_then(|c| c.accent())
}

/// Accent for a raw day value (English name or display label).
pub fn day_accent(value: &str) -> Option<Accent> {
    value.parse::<Day>().ok().and_then(|d| d.accent())
}

/// Token for an optional accent; the empty string stands for "no accent".
pub fn accent_token(accent: Option<Accent>) -> &'static str {
    accent.map(|a| a.token()).unwrap_or("")
}
