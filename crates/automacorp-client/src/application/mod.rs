//! Application layer for the automacorp client.
//!
//! # What lives here?
//!
//! - **`rooms_api`** – The `RoomsApi` port: the operations the synchronization
//!   layer needs from the REST service, plus the `ApiError` type.  Concrete
//!   implementations are injected from the infrastructure layer at
//!   construction time.
//!
//! - **`state`** – `Observable<T>`, the value holder that notifies
//!   subscribers when the synchronization layer publishes a new snapshot.
//!
//! - **`room_sync`** – `RoomSync`, the synchronization layer itself: fetches
//!   remote state, reconciles it into observable view state, and dispatches
//!   mutations back to the server.

pub mod room_sync;
pub mod rooms_api;
pub mod state;
