//! In-memory fake backend implementing [`RoomsApi`].
//!
//! # Why a fake backend?
//!
//! The synchronization layer's behaviour (cascading refreshes, failure
//! policies, last-writer-wins publication) is easiest to observe against a
//! backend whose state the test controls directly.  `InMemoryRoomsApi` keeps
//! rooms and windows in a `Mutex`-protected store and behaves like the REST
//! service:
//!
//! - `create_room` assigns the next free id, ignoring the id it was given.
//! - `update_room` applies the command's fields to the stored room.
//! - `delete_room` also removes that room's windows.
//! - Unknown ids produce [`ApiError::NotFound`].
//!
//! # `set_offline`
//!
//! Call `set_offline(true)` to make every operation fail with
//! [`ApiError::Unavailable`] without touching the stored data.  This is how
//! tests exercise the error paths and then recover from them.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use async_trait::async_trait;
use automacorp_core::{Room, RoomCommand, RoomId, Window, WindowId};

use crate::application::rooms_api::{ApiError, RoomsApi};

#[derive(Default)]
struct Store {
    rooms: Vec<Room>,
    windows: Vec<Window>,
}

/// A fake rooms/windows service that lives entirely in memory.
#[derive(Default)]
pub struct InMemoryRoomsApi {
    store: Mutex<Store>,
    /// When `true`, every call fails with `ApiError::Unavailable`.
    offline: AtomicBool,
    /// Number of calls received, successful or not.
    requests: AtomicUsize,
}

impl InMemoryRoomsApi {
    /// Creates an empty, online backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with rooms and windows.
    pub fn with_data(rooms: Vec<Room>, windows: Vec<Window>) -> Self {
        Self {
            store: Mutex::new(Store { rooms, windows }),
            ..Self::default()
        }
    }

    /// Switches the simulated network on or off.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Snapshot of the stored rooms, in insertion order.
    pub fn rooms(&self) -> Vec<Room> {
        self.lock().rooms.clone()
    }

    /// Snapshot of all stored windows.
    pub fn windows(&self) -> Vec<Window> {
        self.lock().windows.clone()
    }

    /// Number of calls received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Counts the call and fails if offline.
    fn begin(&self) -> Result<(), ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("in-memory backend is offline".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Every mutation is a single push/replace/retain, so a poisoned store
        // is still consistent.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn room_not_found(id: RoomId) -> ApiError {
    ApiError::NotFound {
        resource: format!("room {id}"),
    }
}

#[async_trait]
impl RoomsApi for InMemoryRoomsApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.begin()?;
        Ok(self.lock().rooms.clone())
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, ApiError> {
        self.begin()?;
        self.lock()
            .rooms
            .iter()
            .find(|room| room.id == id)
            .cloned()
            .ok_or_else(|| room_not_found(id))
    }

    async fn update_room(&self, id: RoomId, command: &RoomCommand) -> Result<Room, ApiError> {
        self.begin()?;
        let mut store = self.lock();
        let room = store
            .rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or_else(|| room_not_found(id))?;
        room.name = command.name.clone();
        room.current_temperature = command.current_temperature;
        room.target_temperature = command.target_temperature;
        let updated = room.clone();

        // Keep the denormalised room name on windows in sync.
        for window in store.windows.iter_mut().filter(|w| w.room_id == id) {
            window.room_name = updated.name.clone();
        }
        Ok(updated)
    }

    async fn create_room(&self, room: &Room) -> Result<Room, ApiError> {
        self.begin()?;
        let mut store = self.lock();
        let id = store.rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Room {
            id,
            ..room.clone()
        };
        store.rooms.push(created.clone());
        Ok(created)
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
        self.begin()?;
        let mut store = self.lock();
        let before = store.rooms.len();
        store.rooms.retain(|room| room.id != id);
        if store.rooms.len() == before {
            return Err(room_not_found(id));
        }
        store.windows.retain(|window| window.room_id != id);
        Ok(())
    }

    async fn list_windows(&self, room_id: RoomId) -> Result<Vec<Window>, ApiError> {
        self.begin()?;
        Ok(self
            .lock()
            .windows
            .iter()
            .filter(|window| window.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn update_window(&self, id: WindowId, window: &Window) -> Result<Window, ApiError> {
        self.begin()?;
        let mut store = self.lock();
        let stored = store
            .windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("window {id}"),
            })?;
        *stored = Window {
            id,
            ..window.clone()
        };
        Ok(stored.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
