//! Core data model types for kangoo.
//!
//! A participant is an id plus five editable fields. The three enumerated
//! fields are closed enums with an explicit `Unset` variant, which is what an
//! untouched select holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::labels;

/// Identifier of a participant within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ParticipantId)
    }
}

/// Shoe size of the rental boots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShoeSize {
    #[default]
    #[serde(rename = "")]
    Unset,
    S,
    M,
}

impl ShoeSize {
    pub const OPTIONS: [ShoeSize; 2] = [ShoeSize::S, ShoeSize::M];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoeSize::Unset => "",
            ShoeSize::S => "S",
            ShoeSize::M => "M",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == ShoeSize::Unset
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShoeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" => Ok(ShoeSize::Unset),
            "S" => Ok(ShoeSize::S),
            "M" => Ok(ShoeSize::M),
            _ => Err(format!("unknown shoe size: {}", s.trim())),
        }
    }
}

/// Club the participant trains with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Club {
    #[default]
    #[serde(rename = "")]
    Unset,
    Tilesno,
    Amplua,
}

impl Club {
    pub const OPTIONS: [Club; 2] = [Club::Tilesno, Club::Amplua];

    pub fn as_str(&self) -> &'static str {
        match self {
            Club::Unset => "",
            Club::Tilesno => "Tilesno",
            Club::Amplua => "Amplua",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Club::Unset
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Club {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(Club::Unset),
            "tilesno" => Ok(Club::Tilesno),
            "amplua" => Ok(Club::Amplua),
            _ => Err(format!("unknown club: {}", s.trim())),
        }
    }
}

/// Training day.
///
/// Serialized by English name; displayed with the fixed Russian label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    #[default]
    #[serde(rename = "")]
    Unset,
    Monday,
    Wednesday,
    Friday,
}

impl Day {
    pub const OPTIONS: [Day; 3] = [Day::Monday, Day::Wednesday, Day::Friday];

    /// Stable English key, as used in scripts and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Unset => "",
            Day::Monday => "Monday",
            Day::Wednesday => "Wednesday",
            Day::Friday => "Friday",
        }
    }

    /// Display label shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Unset => "",
            Day::Monday => labels::MONDAY,
            Day::Wednesday => labels::WEDNESDAY,
            Day::Friday => labels::FRIDAY,
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Day::Unset
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Ok(Day::Unset),
            "monday" | "mon" => Ok(Day::Monday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "friday" | "fri" => Ok(Day::Friday),
            _ => Day::OPTIONS
                .into_iter()
                .find(|d| d.label() == trimmed)
                .ok_or_else(|| format!("unknown day: {trimmed}")),
        }
    }
}

/// The five editable values of a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFields {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub shoe_size: ShoeSize,
    #[serde(default)]
    pub club: Club,
    #[serde(default)]
    pub day: Day,
}

impl ParticipantFields {
    /// `true` when every field is empty or unset.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.shoe_size.is_unset()
            && self.club.is_unset()
            && self.day.is_unset()
    }

    /// First and last name joined by a space, as shown in the list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(flatten)]
    pub fields: ParticipantFields,
}
