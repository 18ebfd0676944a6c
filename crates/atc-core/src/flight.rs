//! Flight events and buffer configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::parse_time;

/// Validation errors for flight types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Invalid flight kind value.
    #[error("unknown flight kind: {value}")]
    UnknownKind { value: String },
}

/// Arrival or departure.
///
/// A closed two-variant type so buffer selection is exhaustive and
/// compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightKind {
    Arr,
    Dep,
}

impl FlightKind {
    /// String representation used in plan files and pasted input.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arr => "ARR",
            Self::Dep => "DEP",
        }
    }
}

impl fmt::Display for FlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FlightKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ARR" => Ok(Self::Arr),
            "DEP" => Ok(Self::Dep),
            _ => Err(ValidationError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

/// A validated flight identifier.
///
/// Flight IDs must be non-empty strings. Identity is opaque; two flights may
/// share a time but never an ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightId(String);

impl FlightId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "flight ID" });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FlightId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlightId> for String {
    fn from(id: FlightId) -> Self {
        id.0
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FlightId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single arrival/departure entry in the day's plan.
///
/// Only the raw time string is stored; minutes past midnight are always
/// derived through the time codec so a stale derived value is
/// unrepresentable. An unparsable time keeps the flight in the plan (the
/// input layer flags it for the user) but contributes no exclusion block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: FlightId,
    pub kind: FlightKind,
    /// Raw user input, normalized for display (`0735` becomes `07:35`).
    pub time: String,
}

impl Flight {
    /// Creates a flight, normalizing the raw time input.
    #[must_use]
    pub fn new(id: FlightId, kind: FlightKind, time: &str) -> Self {
        Self {
            id,
            kind,
            time: crate::time::normalize_time(time),
        }
    }

    /// Minutes past midnight, or `None` when the stored time fails to parse.
    #[must_use]
    pub fn minutes(&self) -> Option<i32> {
        parse_time(&self.time)
    }
}

/// Exclusion buffers around arrivals and departures, in minutes.
///
/// Global to the current day's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffers {
    pub arr_before: u16,
    pub arr_after: u16,
    pub dep_before: u16,
    pub dep_after: u16,
}

impl Default for Buffers {
    fn default() -> Self {
        Self {
            arr_before: 15,
            arr_after: 5,
            dep_before: 10,
            dep_after: 5,
        }
    }
}

impl Buffers {
    /// Returns the `(before, after)` pair for the given kind.
    #[must_use]
    pub fn for_kind(&self, kind: FlightKind) -> (i32, i32) {
        match kind {
            FlightKind::Arr => (i32::from(self.arr_before), i32::from(self.arr_after)),
            FlightKind::Dep => (i32::from(self.dep_before), i32::from(self.dep_after)),
        }
    }
}
