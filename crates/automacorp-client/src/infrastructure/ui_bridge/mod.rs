//! Command bridge between [`RoomSync`] and a UI host.
//!
//! A UI host (a desktop WebView, a TUI, a test harness) never touches
//! `Room`/`Window` records or the observable holders directly.  It calls the
//! functions in this module, which either snapshot state into display-ready
//! DTOs or forward a user intent to the synchronization layer.  Only this
//! module references both the application layer and presentation concerns
//! such as label formatting.
//!
//! ```text
//! UI host                          ui_bridge                 RoomSync
//! ──────────────────────────────────────────────────────────────────────
//! get_rooms_view()        ───────> rooms_state() snapshot
//!                         <─────── RoomsViewDto
//! update_target_temperature(1, 21.27)
//!                         ───────> save_room(1, room@21.27) ──> PUT rooms/1
//!                         <─────── RoomDetailDto (target 21.3)
//! ```
//!
//! # DTOs
//!
//! The DTOs are plain serializable snapshots: temperatures are pre-rendered
//! as labels showing the value as received (`"19.26°"`, `"21.0°"`, or `"?°"`
//! when the room has no sensor value), and
//! window status is the wire string `"OPENED"` / `"CLOSED"`.
//!
//! # `CommandResult<T>`
//!
//! Every function returns `CommandResult<T>`, a unified envelope:
//! ```json
//! { "success": true,  "data": {...}, "error": null  }
//! { "success": false, "data": null,  "error": "..."  }
//! ```
//! so the host can use a single error-handling pattern for all commands.

use automacorp_core::{Room, RoomId, RoomList, Window, WindowId, WindowStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::room_sync::RoomSync;

/// Shown in place of the room list when it is empty.
pub const NO_ROOM_MESSAGE: &str = "No room found";

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// One row of the room list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomItemDto {
    pub id: RoomId,
    pub name: String,
    pub current_temperature_label: String,
    pub target_temperature_label: String,
}

impl From<&Room> for RoomItemDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            current_temperature_label: temperature_label(room.current_temperature),
            target_temperature_label: temperature_label(room.target_temperature),
        }
    }
}

/// The room list screen.
///
/// At most one of `empty_message` and `error` is set.  When the last refresh
/// failed, `rooms` is empty and `error` carries the toast text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomsViewDto {
    pub rooms: Vec<RoomItemDto>,
    pub empty_message: Option<String>,
    pub error: Option<String>,
}

impl From<&RoomList> for RoomsViewDto {
    fn from(list: &RoomList) -> Self {
        match list {
            RoomList::Failed(error) => Self {
                rooms: Vec::new(),
                empty_message: None,
                error: Some(format!("Error on rooms loading {error}")),
            },
            RoomList::Loaded(rooms) => Self {
                rooms: rooms.iter().map(RoomItemDto::from).collect(),
                empty_message: rooms.is_empty().then(|| NO_ROOM_MESSAGE.to_string()),
                error: None,
            },
        }
    }
}

/// The room detail screen.
///
/// `target_temperature` stays numeric because the host edits it (slider or
/// text field); the label is for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: RoomId,
    pub name: String,
    pub current_temperature_label: String,
    pub target_temperature: Option<f64>,
    pub target_temperature_label: String,
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            current_temperature_label: temperature_label(room.current_temperature),
            target_temperature: room.target_temperature,
            target_temperature_label: temperature_label(room.target_temperature),
        }
    }
}

/// One row of the window list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowItemDto {
    pub id: WindowId,
    pub name: String,
    /// `"OPENED"` or `"CLOSED"`.
    pub status: String,
}

impl From<&Window> for WindowItemDto {
    fn from(window: &Window) -> Self {
        Self {
            id: window.id,
            name: window.name.clone(),
            status: status_label(window.window_status).to_string(),
        }
    }
}

/// Unified response wrapper for bridge commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    /// `true` if the command completed successfully; `false` on error.
    pub success: bool,
    /// The command's return value, present only when `success` is `true`.
    pub data: Option<T>,
    /// A human-readable error message, present only when `success` is `false`.
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Snapshot of the room list screen.
pub fn get_rooms_view(sync: &RoomSync) -> CommandResult<RoomsViewDto> {
    CommandResult::ok(RoomsViewDto::from(&sync.rooms_state()))
}

/// Snapshot of the selected room, `None` if nothing is selected.
pub fn get_selected_room(sync: &RoomSync) -> CommandResult<Option<RoomDetailDto>> {
    CommandResult::ok(sync.selected_room().as_ref().map(RoomDetailDto::from))
}

/// Snapshot of the windows of the room last opened.
pub fn get_windows(sync: &RoomSync) -> CommandResult<Vec<WindowItemDto>> {
    CommandResult::ok(sync.windows_state().iter().map(WindowItemDto::from).collect())
}

// ── Intents ───────────────────────────────────────────────────────────────────

/// Reloads the room list.  The outcome is read back with [`get_rooms_view`].
pub async fn refresh_rooms(sync: &RoomSync) -> CommandResult<RoomsViewDto> {
    // A failed refresh is still a renderable view (it carries the error).
    let _ = sync.refresh_rooms().await;
    get_rooms_view(sync)
}

/// Opens the detail screen: loads the room, then its windows.
///
/// A failure to load the windows does not fail the command; the window list
/// keeps whatever it showed before.
pub async fn open_room(sync: &RoomSync, id: RoomId) -> CommandResult<RoomDetailDto> {
    let room = match sync.load_room(id).await {
        Ok(room) => room,
        Err(e) => return CommandResult::err(e.to_string()),
    };
    if let Err(e) = sync.load_windows(id).await {
        debug!(room_id = id, "windows not refreshed: {e}");
    }
    CommandResult::ok(RoomDetailDto::from(&room))
}

/// Saves a new target temperature for room `id`.
///
/// The other fields come from the selected room when it is room `id`,
/// otherwise the room is loaded first.
pub async fn update_target_temperature(
    sync: &RoomSync,
    id: RoomId,
    value: f64,
) -> CommandResult<RoomDetailDto> {
    let current = match sync.selected_room().filter(|room| room.id == id) {
        Some(room) => room,
        None => match sync.load_room(id).await {
            Ok(room) => room,
            Err(e) => return CommandResult::err(e.to_string()),
        },
    };

    match sync.save_room(id, &current.with_target_temperature(value)).await {
        Ok(saved) => CommandResult::ok(RoomDetailDto::from(&saved)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Flips a window shown in the current window list.
pub async fn toggle_window(sync: &RoomSync, window_id: WindowId) -> CommandResult<WindowItemDto> {
    let Some(window) = sync
        .windows_state()
        .into_iter()
        .find(|window| window.id == window_id)
    else {
        return CommandResult::err(format!("window {window_id} is not loaded"));
    };

    match sync.toggle_window(&window).await {
        Ok(saved) => CommandResult::ok(WindowItemDto::from(&saved)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Deletes room `id`; the room list refreshes itself afterwards.
pub async fn delete_room(sync: &RoomSync, id: RoomId) -> CommandResult<()> {
    match sync.delete_room(id).await {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

// ── Formatting helpers ────────────────────────────────────────────────────────

/// Renders the value as received; `{:?}` keeps the `.0` on whole numbers.
fn temperature_label(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:?}°"),
        None => "?°".to_string(),
    }
}

fn status_label(status: WindowStatus) -> &'static str {
    if status.is_open() {
        "OPENED"
    } else {
        "CLOSED"
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::InMemoryRoomsApi;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn lab() -> Room {
        Room::new(1, "Lab")
            .with_current_temperature(19.5)
            .with_target_temperature(21.0)
    }

    fn lab_window(id: WindowId) -> Window {
        Window {
            id,
            name: format!("Window {id}"),
            room_id: 1,
            room_name: "Lab".to_string(),
            window_status: WindowStatus::Closed,
        }
    }

    fn make_sync(api: InMemoryRoomsApi) -> (RoomSync, Arc<InMemoryRoomsApi>) {
        let api = Arc::new(api);
        let sync = RoomSync::new(api.clone(), Handle::current());
        (sync, api)
    }

    #[test]
    fn test_temperature_label_keeps_whole_number_decimal() {
        assert_eq!(temperature_label(Some(21.0)), "21.0°");
    }

    #[test]
    fn test_temperature_label_does_not_round_measured_value() {
        assert_eq!(temperature_label(Some(19.26)), "19.26°");
        assert_eq!(temperature_label(Some(-2.5)), "-2.5°");
    }

    #[test]
    fn test_window_item_status_for_closed_window() {
        let item = WindowItemDto::from(&lab_window(11));
        assert_eq!(item.status, "CLOSED");
    }

    #[test]
    fn test_unknown_temperature_renders_question_mark() {
        assert_eq!(temperature_label(None), "?°");
    }

    #[test]
    fn test_empty_loaded_list_shows_no_room_message() {
        let view = RoomsViewDto::from(&RoomList::default());
        assert!(view.rooms.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(NO_ROOM_MESSAGE));
        assert!(view.error.is_none());
    }

    #[test]
    fn test_failed_list_shows_error_and_no_rooms() {
        // Arrange
        let list = RoomList::Failed("connection refused".to_string());

        // Act
        let view = RoomsViewDto::from(&list);

        // Assert
        assert!(view.rooms.is_empty());
        assert!(view.empty_message.is_none());
        assert_eq!(
            view.error.as_deref(),
            Some("Error on rooms loading connection refused")
        );
    }

    #[test]
    fn test_room_item_labels() {
        let item = RoomItemDto::from(&Room::new(4, "Attic").with_target_temperature(18.0));
        assert_eq!(item.current_temperature_label, "?°");
        assert_eq!(item.target_temperature_label, "18.0°");
    }

    #[test]
    fn test_window_item_status_is_wire_string() {
        let item = WindowItemDto::from(&lab_window(10).with_toggled_status());
        assert_eq!(item.status, "OPENED");
    }

    #[test]
    fn test_command_result_ok_sets_success_true() {
        let r: CommandResult<u32> = CommandResult::ok(99);
        assert!(r.success);
        assert_eq!(r.data.unwrap(), 99);
        assert!(r.error.is_none());
    }

    #[test]
    fn test_command_result_err_sets_success_false() {
        let r: CommandResult<u32> = CommandResult::err("oops");
        assert!(!r.success);
        assert!(r.data.is_none());
        assert_eq!(r.error.unwrap(), "oops");
    }

    #[tokio::test]
    async fn test_refresh_rooms_renders_loaded_rooms() {
        // Arrange
        let (sync, _api) = make_sync(InMemoryRoomsApi::with_data(vec![lab()], vec![]));

        // Act
        let result = refresh_rooms(&sync).await;

        // Assert
        assert!(result.success);
        let view = result.data.unwrap();
        assert_eq!(view.rooms.len(), 1);
        assert_eq!(view.rooms[0].target_temperature_label, "21.0°");
        assert!(view.empty_message.is_none());
    }

    #[tokio::test]
    async fn test_refresh_rooms_offline_renders_error_view() {
        let (sync, api) = make_sync(InMemoryRoomsApi::with_data(vec![lab()], vec![]));
        api.set_offline(true);

        let view = refresh_rooms(&sync).await.data.unwrap();

        assert!(view.rooms.is_empty());
        assert!(view.error.unwrap().starts_with("Error on rooms loading "));
    }

    #[tokio::test]
    async fn test_open_room_loads_room_and_windows() {
        // Arrange
        let (sync, _api) = make_sync(InMemoryRoomsApi::with_data(
            vec![lab()],
            vec![lab_window(10), lab_window(11)],
        ));

        // Act
        let result = open_room(&sync, 1).await;

        // Assert
        assert!(result.success);
        assert_eq!(result.data.unwrap().name, "Lab");
        assert_eq!(get_windows(&sync).data.unwrap().len(), 2);
        assert!(get_selected_room(&sync).data.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_open_unknown_room_fails() {
        let (sync, _api) = make_sync(InMemoryRoomsApi::new());

        let result = open_room(&sync, 42).await;

        assert!(!result.success);
        assert!(get_selected_room(&sync).data.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_target_temperature_rounds_and_keeps_name() {
        // Arrange
        let (sync, api) = make_sync(InMemoryRoomsApi::with_data(vec![lab()], vec![]));
        open_room(&sync, 1).await;

        // Act
        let result = update_target_temperature(&sync, 1, 21.27).await;

        // Assert
        let dto = result.data.unwrap();
        assert_eq!(dto.target_temperature, Some(21.3));
        assert_eq!(dto.target_temperature_label, "21.3°");
        assert_eq!(api.rooms()[0].name, "Lab");
    }

    #[tokio::test]
    async fn test_update_target_temperature_loads_unselected_room() {
        let (sync, api) = make_sync(InMemoryRoomsApi::with_data(vec![lab()], vec![]));

        let result = update_target_temperature(&sync, 1, 17.04).await;

        assert!(result.success);
        assert_eq!(api.rooms()[0].target_temperature, Some(17.0));
        assert_eq!(api.rooms()[0].current_temperature, Some(19.5));
    }

    #[tokio::test]
    async fn test_toggle_window_flips_loaded_window() {
        // Arrange
        let (sync, _api) = make_sync(InMemoryRoomsApi::with_data(
            vec![lab()],
            vec![lab_window(10)],
        ));
        open_room(&sync, 1).await;

        // Act
        let result = toggle_window(&sync, 10).await;

        // Assert
        assert_eq!(result.data.unwrap().status, "OPENED");
        assert_eq!(get_windows(&sync).data.unwrap()[0].status, "OPENED");
    }

    #[tokio::test]
    async fn test_toggle_window_not_loaded_fails_without_request() {
        let (sync, api) = make_sync(InMemoryRoomsApi::with_data(vec![lab()], vec![lab_window(10)]));

        let result = toggle_window(&sync, 10).await;

        assert!(!result.success);
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_room_refreshes_view() {
        // Arrange
        let (sync, _api) = make_sync(InMemoryRoomsApi::with_data(
            vec![lab(), Room::new(2, "Office")],
            vec![],
        ));
        refresh_rooms(&sync).await;

        // Act
        let result = delete_room(&sync, 1).await;

        // Assert
        assert!(result.success);
        let view = get_rooms_view(&sync).data.unwrap();
        assert_eq!(view.rooms.len(), 1);
        assert_eq!(view.rooms[0].name, "Office");
    }
}
