//! Window domain entity.
//!
//! Every window belongs to exactly one room.  The room's id *and* name are
//! carried on the window record itself (the service denormalises them), so a
//! window list can be rendered without a second lookup.

use serde::{Deserialize, Serialize};

use super::room::RoomId;

/// Server-assigned identifier of a window.
pub type WindowId = i64;

/// Open/closed state of a window.
///
/// Serialised as `"OPENED"` / `"CLOSED"`.  There are no intermediate states:
/// a status change is always a [`toggle`](WindowStatus::toggled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowStatus {
    Opened,
    Closed,
}

impl WindowStatus {
    /// Returns the other status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Opened => Self::Closed,
            Self::Closed => Self::Opened,
        }
    }

    /// Returns `true` for [`WindowStatus::Opened`].
    pub fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// A window as returned by `GET rooms/{id}/windows` and sent to
/// `PUT windows/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: WindowId,
    pub name: String,
    /// Identifier of the owning room.
    pub room_id: RoomId,
    /// Name of the owning room (denormalised).
    pub room_name: String,
    pub window_status: WindowStatus,
}

impl Window {
    /// Returns a copy of this window with its status flipped.
    pub fn with_toggled_status(&self) -> Self {
        Self {
            window_status: self.window_status.toggled(),
            ..self.clone()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
