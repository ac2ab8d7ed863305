//! automacorp-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! UI hosts share the same module tree.
//!
//! # What does automacorp-client do? (for beginners)
//!
//! The automacorp REST service knows about rooms (with current and target
//! temperatures) and the windows in those rooms.  A UI wants to show that data
//! and let the user change it, without ever blocking on the network.  This
//! crate is the part in between:
//!
//! 1. `HttpRoomsApi` turns each operation into one HTTP request and decodes
//!    the JSON response into `automacorp_core` records.
//! 2. `RoomSync` runs those operations on a background pool and publishes the
//!    outcomes as observable state (`rooms_state`, `selected_room`,
//!    `windows_state`) plus transient notices for failures.
//! 3. `ui_bridge` turns that state into display-ready DTOs and maps user
//!    intents (open a room, change its target temperature, toggle a window)
//!    back onto `RoomSync` actions.
//!
//! # Wiring example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use automacorp_client::application::room_sync::RoomSync;
//! use automacorp_client::infrastructure::{
//!     api::HttpRoomsApi, config::ClientConfig, logging, runtime::BackgroundPool,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! logging::init();
//! let config = ClientConfig::from_env()?;
//! let pool = BackgroundPool::new(config.worker_threads)?;
//! let api = Arc::new(HttpRoomsApi::from_config(&config)?);
//! let sync = RoomSync::with_notice_capacity(api, pool.handle(), config.notice_capacity);
//!
//! let mut rooms = sync.subscribe_rooms();
//! sync.spawn_refresh_rooms();
//! pool.handle().block_on(rooms.changed())?;
//! println!("{:?}", sync.rooms_state());
//! # Ok(())
//! # }
//! ```

/// Application layer: the synchronization layer and its ports.
pub mod application;

/// Infrastructure layer: HTTP client, configuration, logging, background
/// pool, and the presentation bridge.
pub mod infrastructure;
