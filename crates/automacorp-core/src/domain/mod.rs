//! Domain entities for the automacorp client.
//!
//! Everything in this module is a plain data record mirroring a JSON payload
//! of the REST service, plus the small amount of pure logic attached to those
//! records (temperature rounding, window status toggling).
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The domain layer is the innermost layer.  It has **no** imports from
//! network libraries, async runtimes, or UI frameworks, so it can be compiled
//! and tested anywhere.  The client crate's application and infrastructure
//! layers depend on it; it never depends on them.

/// Rooms and the room update command.
pub mod room;

/// The room list result envelope.
pub mod room_list;

/// Windows and their open/closed status.
pub mod window;
