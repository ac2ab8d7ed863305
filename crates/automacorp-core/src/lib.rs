//! # automacorp-core
//!
//! Shared domain types for the automacorp climate-control client: the wire
//! records exchanged with the rooms/windows REST service and the result
//! envelope the synchronization layer publishes to the UI.
//!
//! This crate has zero dependencies on HTTP clients, async runtimes, or UI
//! frameworks.
//!
//! # Architecture overview (for beginners)
//!
//! The REST service manages *rooms* (each with a current and a target
//! temperature) and *windows* (each belonging to exactly one room and being
//! either open or closed).  The client application fetches these records,
//! keeps the latest copy in observable state, and sends edits back.
//!
//! - **`domain::room`** – `Room` (read shape) and `RoomCommand` (write-only
//!   update payload with the target temperature rounded to one decimal).
//! - **`domain::window`** – `Window` and its two-value `WindowStatus`.
//! - **`domain::room_list`** – `RoomList`, the "either the rooms or why they
//!   are missing" envelope.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `automacorp_core::Room` instead of `automacorp_core::domain::room::Room`.
pub use domain::room::{round_to_one_decimal, Room, RoomCommand, RoomId};
pub use domain::room_list::RoomList;
pub use domain::window::{Window, WindowId, WindowStatus};
