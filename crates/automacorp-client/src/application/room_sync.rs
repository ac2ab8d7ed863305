//! RoomSync: the room/window synchronization layer.
//!
//! `RoomSync` sits between the [`RoomsApi`] port and the presentation layer.
//! It owns three pieces of observable state and exposes one action per user
//! intent.  Each action performs its remote call, applies the outcome to state
//! in a single atomic replace, and hands the outcome back to the caller.
//!
//! # State surface
//!
//! | Holder          | Type            | Replaced by                           |
//! |-----------------|-----------------|---------------------------------------|
//! | `rooms_state`   | `RoomList`      | `refresh_rooms` (and its cascades)    |
//! | `selected_room` | `Option<Room>`  | `load_room`, `save_room`              |
//! | `windows_state` | `Vec<Window>`   | `load_windows` (success only)         |
//!
//! # Failure policy
//!
//! No failure escapes as a panic.  Every failure is logged, then:
//!
//! - `refresh_rooms` publishes `RoomList::Failed` (the previous list is
//!   discarded) and emits [`SyncNotice::RoomsLoadFailed`].
//! - `load_room` / `save_room` clear `selected_room`; `save_room` also emits
//!   [`SyncNotice::MutationFailed`].
//! - `load_windows` leaves `windows_state` untouched.
//! - `create_room`, `delete_room`, `save_window` change no state and emit
//!   [`SyncNotice::MutationFailed`].
//!
//! The error is also returned to whoever awaited the action.
//!
//! # Dispatch (for beginners)
//!
//! The `async fn` actions run on whatever task awaits them.  The `spawn_*`
//! variants submit the same action to the background pool and return a
//! [`JoinHandle`] immediately, so a UI thread never blocks on the network.
//! Spawned units are independent: two concurrent `spawn_refresh_rooms` calls
//! race, and whichever *completes* last determines the published list.
//!
//! # Disposal
//!
//! After [`RoomSync::dispose`], actions still run to completion (there is no
//! cancellation), but their results are no longer published.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use automacorp_core::{Room, RoomCommand, RoomId, RoomList, Window, WindowId};
use tokio::{
    runtime::Handle,
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use super::rooms_api::{ApiError, RoomsApi};
use super::state::Observable;

/// Default capacity of the notice channel.
pub const DEFAULT_NOTICE_CAPACITY: usize = 16;

/// Largest accepted notice channel capacity.  The channel allocates every
/// slot up front.
pub const MAX_NOTICE_CAPACITY: usize = 1024;

/// Which mutation a [`SyncNotice::MutationFailed`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    SaveRoom(RoomId),
    CreateRoom,
    DeleteRoom(RoomId),
    SaveWindow(WindowId),
}

/// Transient notifications for the presentation layer (toast equivalents).
///
/// Notices are not state: a subscriber that joins late does not see old ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncNotice {
    /// `refresh_rooms` failed; `rooms_state` now carries the same error.
    RoomsLoadFailed { error: String },
    /// A mutation was rejected or could not reach the server.
    MutationFailed {
        action: MutationAction,
        error: String,
    },
}

struct Inner {
    api: Arc<dyn RoomsApi>,
    pool: Handle,
    rooms_state: Observable<RoomList>,
    selected_room: Observable<Option<Room>>,
    windows_state: Observable<Vec<Window>>,
    notices: broadcast::Sender<SyncNotice>,
    disposed: AtomicBool,
}

/// The synchronization layer.
///
/// Cheap to clone: all clones share the same state holders, so one clone can
/// be moved into a background task while another stays with the UI.
#[derive(Clone)]
pub struct RoomSync {
    inner: Arc<Inner>,
}

impl RoomSync {
    /// Creates a synchronization layer that spawns background work on `pool`.
    pub fn new(api: Arc<dyn RoomsApi>, pool: Handle) -> Self {
        Self::with_notice_capacity(api, pool, DEFAULT_NOTICE_CAPACITY)
    }

    /// Like [`RoomSync::new`] with an explicit notice channel capacity.
    ///
    /// A slow notice subscriber that falls more than `capacity` notices behind
    /// skips the oldest ones.  `capacity` is clamped to
    /// `1..=MAX_NOTICE_CAPACITY`.
    pub fn with_notice_capacity(api: Arc<dyn RoomsApi>, pool: Handle, capacity: usize) -> Self {
        let (notices, _rx) = broadcast::channel(capacity.clamp(1, MAX_NOTICE_CAPACITY));
        Self {
            inner: Arc::new(Inner {
                api,
                pool,
                rooms_state: Observable::default(),
                selected_room: Observable::default(),
                windows_state: Observable::default(),
                notices,
                disposed: AtomicBool::new(false),
            }),
        }
    }

    // ── State surface ─────────────────────────────────────────────────────────

    /// Snapshot of the latest room list outcome.
    pub fn rooms_state(&self) -> RoomList {
        self.inner.rooms_state.get()
    }

    /// Snapshot of the last successfully loaded or saved room.
    pub fn selected_room(&self) -> Option<Room> {
        self.inner.selected_room.get()
    }

    /// Snapshot of the windows of the room last queried.
    pub fn windows_state(&self) -> Vec<Window> {
        self.inner.windows_state.get()
    }

    pub fn subscribe_rooms(&self) -> watch::Receiver<RoomList> {
        self.inner.rooms_state.subscribe()
    }

    pub fn subscribe_selected_room(&self) -> watch::Receiver<Option<Room>> {
        self.inner.selected_room.subscribe()
    }

    pub fn subscribe_windows(&self) -> watch::Receiver<Vec<Window>> {
        self.inner.windows_state.subscribe()
    }

    /// Subscribes to transient notices emitted from now on.
    pub fn subscribe_notices(&self) -> broadcast::Receiver<SyncNotice> {
        self.inner.notices.subscribe()
    }

    /// Stops publishing results.  In-flight actions complete but are dropped.
    pub fn dispose(&self) {
        if !self.inner.disposed.swap(true, Ordering::AcqRel) {
            info!("room sync disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// Reloads the room list.
    ///
    /// On failure the previous list is discarded, not kept as stale data.
    pub async fn refresh_rooms(&self) -> Result<(), ApiError> {
        match self.inner.api.list_rooms().await {
            Ok(rooms) => {
                info!(count = rooms.len(), "rooms loaded");
                self.publish(&self.inner.rooms_state, RoomList::Loaded(rooms));
                Ok(())
            }
            Err(e) => {
                warn!("failed to load rooms: {e}");
                let error = e.to_string();
                self.publish(&self.inner.rooms_state, RoomList::Failed(error.clone()));
                self.notify(SyncNotice::RoomsLoadFailed { error });
                Err(e)
            }
        }
    }

    /// Loads one room into `selected_room`.
    pub async fn load_room(&self, id: RoomId) -> Result<Room, ApiError> {
        match self.inner.api.get_room(id).await {
            Ok(room) => {
                debug!(room_id = id, "room loaded");
                self.publish(&self.inner.selected_room, Some(room.clone()));
                Ok(room)
            }
            Err(e) => {
                warn!(room_id = id, "failed to load room: {e}");
                self.publish(&self.inner.selected_room, None);
                Err(e)
            }
        }
    }

    /// Sends `room`'s editable fields as an update for room `id`.
    ///
    /// The target temperature is rounded to one decimal before sending.
    pub async fn save_room(&self, id: RoomId, room: &Room) -> Result<Room, ApiError> {
        let command = RoomCommand::from_room(room);
        match self.inner.api.update_room(id, &command).await {
            Ok(updated) => {
                info!(room_id = id, target = ?updated.target_temperature, "room saved");
                self.publish(&self.inner.selected_room, Some(updated.clone()));
                Ok(updated)
            }
            Err(e) => {
                warn!(room_id = id, "failed to save room: {e}");
                self.publish(&self.inner.selected_room, None);
                self.notify_mutation_failed(MutationAction::SaveRoom(id), &e);
                Err(e)
            }
        }
    }

    /// Creates a room, then reloads the whole list.
    ///
    /// The created room is not merged into the current list; the follow-up
    /// refresh is what makes it visible.  A failed refresh is reflected in
    /// `rooms_state` but does not turn the creation into an error.
    pub async fn create_room(&self, room: &Room) -> Result<Room, ApiError> {
        match self.inner.api.create_room(room).await {
            Ok(created) => {
                info!(room_id = created.id, name = %created.name, "room created");
                let _ = self.refresh_rooms().await;
                Ok(created)
            }
            Err(e) => {
                warn!(name = %room.name, "failed to create room: {e}");
                self.notify_mutation_failed(MutationAction::CreateRoom, &e);
                Err(e)
            }
        }
    }

    /// Deletes a room, then reloads the whole list.
    pub async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
        match self.inner.api.delete_room(id).await {
            Ok(()) => {
                info!(room_id = id, "room deleted");
                let _ = self.refresh_rooms().await;
                Ok(())
            }
            Err(e) => {
                warn!(room_id = id, "failed to delete room: {e}");
                self.notify_mutation_failed(MutationAction::DeleteRoom(id), &e);
                Err(e)
            }
        }
    }

    /// Replaces `windows_state` with the windows of `room_id`.
    ///
    /// On failure the previously published windows stay in place.
    pub async fn load_windows(&self, room_id: RoomId) -> Result<(), ApiError> {
        match self.inner.api.list_windows(room_id).await {
            Ok(windows) => {
                debug!(room_id, count = windows.len(), "windows loaded");
                self.publish(&self.inner.windows_state, windows);
                Ok(())
            }
            Err(e) => {
                warn!(room_id, "failed to load windows: {e}");
                Err(e)
            }
        }
    }

    /// Sends a window update.  Publishes nothing; call
    /// [`load_windows`](Self::load_windows) to observe the effect.
    pub async fn save_window(&self, id: WindowId, window: &Window) -> Result<Window, ApiError> {
        match self.inner.api.update_window(id, window).await {
            Ok(saved) => {
                info!(window_id = id, status = ?saved.window_status, "window saved");
                Ok(saved)
            }
            Err(e) => {
                warn!(window_id = id, "failed to save window: {e}");
                self.notify_mutation_failed(MutationAction::SaveWindow(id), &e);
                Err(e)
            }
        }
    }

    /// Flips a window between open and closed, then reloads its room's windows.
    pub async fn toggle_window(&self, window: &Window) -> Result<Window, ApiError> {
        let toggled = window.with_toggled_status();
        let saved = self.save_window(window.id, &toggled).await?;
        let _ = self.load_windows(window.room_id).await;
        Ok(saved)
    }

    // ── Background dispatch ───────────────────────────────────────────────────

    pub fn spawn_refresh_rooms(&self) -> JoinHandle<Result<(), ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.refresh_rooms().await })
    }

    pub fn spawn_load_room(&self, id: RoomId) -> JoinHandle<Result<Room, ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.load_room(id).await })
    }

    pub fn spawn_save_room(&self, id: RoomId, room: Room) -> JoinHandle<Result<Room, ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.save_room(id, &room).await })
    }

    pub fn spawn_create_room(&self, room: Room) -> JoinHandle<Result<Room, ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.create_room(&room).await })
    }

    pub fn spawn_delete_room(&self, id: RoomId) -> JoinHandle<Result<(), ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.delete_room(id).await })
    }

    pub fn spawn_load_windows(&self, room_id: RoomId) -> JoinHandle<Result<(), ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.load_windows(room_id).await })
    }

    pub fn spawn_save_window(
        &self,
        id: WindowId,
        window: Window,
    ) -> JoinHandle<Result<Window, ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.save_window(id, &window).await })
    }

    pub fn spawn_toggle_window(&self, window: Window) -> JoinHandle<Result<Window, ApiError>> {
        let this = self.clone();
        self.inner.pool.spawn(async move { this.toggle_window(&window).await })
    }

    // ── Publication helpers ───────────────────────────────────────────────────

    fn publish<T: Clone>(&self, holder: &Observable<T>, value: T) {
        if self.is_disposed() {
            debug!("room sync disposed; dropping state update");
            return;
        }
        holder.replace(value);
    }

    fn notify(&self, notice: SyncNotice) {
        if self.is_disposed() {
            return;
        }
        // `send` only fails when nobody is listening, which is fine for notices.
        if self.inner.notices.send(notice).is_err() {
            debug!("no notice subscribers");
        }
    }

    fn notify_mutation_failed(&self, action: MutationAction, error: &ApiError) {
        self.notify(SyncNotice::MutationFailed {
            action,
            error: error.to_string(),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
