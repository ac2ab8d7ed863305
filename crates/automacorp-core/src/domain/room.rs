//! Room domain entity and its write-only update command.
//!
//! A [`Room`] is what the REST service returns for `GET rooms` and
//! `GET rooms/{id}`.  A [`RoomCommand`] is what the client sends for
//! `PUT rooms/{id}`: the same data minus the identifier, with the target
//! temperature rounded to one decimal place.
//!
//! # JSON shape
//!
//! ```json
//! { "id": 1, "name": "Lab", "currentTemperature": 19.5, "targetTemperature": 21.0 }
//! ```
//!
//! Temperatures are `null` when unknown (a freshly created room has no sensor
//! reading yet).

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a room.
pub type RoomId = i64;

/// A room as returned by the REST service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique identifier assigned by the server.
    pub id: RoomId,
    /// Display name, e.g. `"Lab"`.
    pub name: String,
    /// Last measured temperature in °C, `None` until a reading exists.
    #[serde(default)]
    pub current_temperature: Option<f64>,
    /// Temperature the room should be regulated to, in °C.
    #[serde(default)]
    pub target_temperature: Option<f64>,
}

impl Room {
    /// Creates a room with no temperature information.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current_temperature: None,
            target_temperature: None,
        }
    }

    /// Returns a copy of this room with a different target temperature.
    pub fn with_target_temperature(mut self, target: f64) -> Self {
        self.target_temperature = Some(target);
        self
    }

    /// Returns a copy of this room with a different current temperature.
    pub fn with_current_temperature(mut self, current: f64) -> Self {
        self.current_temperature = Some(current);
        self
    }
}

/// Update payload for `PUT rooms/{id}`.
///
/// Never deserialized by the client: reads always produce a [`Room`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCommand {
    pub name: String,
    pub current_temperature: Option<f64>,
    /// Rounded to one decimal place by [`RoomCommand::from_room`].
    pub target_temperature: Option<f64>,
}

impl RoomCommand {
    /// Projects a [`Room`] into an update command.
    ///
    /// The target temperature is rounded with [`round_to_one_decimal`] so that
    /// slider values such as `21.27` are stored as `21.3`.  The current
    /// temperature is passed through unchanged.
    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            current_temperature: room.current_temperature,
            target_temperature: room.target_temperature.map(round_to_one_decimal),
        }
    }
}

impl From<&Room> for RoomCommand {
    fn from(room: &Room) -> Self {
        Self::from_room(room)
    }
}

/// Rounds a temperature to one decimal place: `round(x * 10) / 10`.
///
/// Halves round towards positive infinity (`21.25` → `21.3`,
/// `-21.25` → `-21.2`).
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
