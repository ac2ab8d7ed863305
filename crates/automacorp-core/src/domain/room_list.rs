//! The room list result envelope.
//!
//! [`RoomList`] is the value the synchronization layer publishes after every
//! `GET rooms`: either the rooms the server returned, or a description of why
//! they could not be loaded.  It is a tagged union so that a half-failed state
//! ("here are some rooms, and also an error") cannot be constructed.

use super::room::{Room, RoomId};

/// Latest outcome of loading the room list.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomList {
    /// The rooms in server-returned order.
    Loaded(Vec<Room>),
    /// Loading failed; carries a human-readable description of the error.
    Failed(String),
}

impl Default for RoomList {
    /// An empty, successfully loaded list: what the UI shows before the
    /// first fetch completes.
    fn default() -> Self {
        Self::Loaded(Vec::new())
    }
}

impl RoomList {
    /// Returns the rooms to render.  Always empty when loading failed.
    pub fn rooms(&self) -> &[Room] {
        match self {
            Self::Loaded(rooms) => rooms,
            Self::Failed(_) => &[],
        }
    }

    /// Returns the failure description, if loading failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` if a room with `id` is part of a loaded list.
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms().iter().any(|room| room.id == id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
