//! RoomsApi: the port through which the synchronization layer reaches the
//! REST service.
//!
//! The trait lives in the application layer; implementations live in the
//! infrastructure layer (`HttpRoomsApi` for the real service,
//! `InMemoryRoomsApi` for tests and offline UI hosts).  This keeps
//! [`RoomSync`](super::room_sync::RoomSync) free of any HTTP details.
//!
//! # One method, one round trip
//!
//! Every method corresponds to exactly one request on the resource surface:
//!
//! | Method          | HTTP                     |
//! |-----------------|--------------------------|
//! | `list_rooms`    | `GET rooms`              |
//! | `get_room`      | `GET rooms/{id}`         |
//! | `update_room`   | `PUT rooms/{id}`         |
//! | `create_room`   | `POST rooms`             |
//! | `delete_room`   | `DELETE rooms/{id}`      |
//! | `list_windows`  | `GET rooms/{id}/windows` |
//! | `update_window` | `PUT windows/{id}`       |
//!
//! Implementations must not retry, cache, or override transport timeouts.

use async_trait::async_trait;
use automacorp_core::{Room, RoomCommand, RoomId, Window, WindowId};
use thiserror::Error;

/// Error type for remote API operations.
///
/// Every variant is a "network error" from the synchronization layer's point
/// of view; the variants exist so logs and tests can tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL or a resource path could not be turned into a URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, or I/O failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered 404 for the requested resource.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The server answered with a non-2xx status other than 404.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend refused to serve the request (offline fake backend).
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Typed, stateless façade over the rooms/windows REST resources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsApi: Send + Sync {
    /// Fetches every room, in server order.
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;

    /// Fetches a single room.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no room has this id.
    async fn get_room(&self, id: RoomId) -> Result<Room, ApiError>;

    /// Replaces a room's editable fields and returns the stored room.
    async fn update_room(&self, id: RoomId, command: &RoomCommand) -> Result<Room, ApiError>;

    /// Creates a room; the server assigns the identifier.
    async fn create_room(&self, room: &Room) -> Result<Room, ApiError>;

    /// Deletes a room.
    async fn delete_room(&self, id: RoomId) -> Result<(), ApiError>;

    /// Fetches the windows of one room.
    async fn list_windows(&self, room_id: RoomId) -> Result<Vec<Window>, ApiError>;

    /// Replaces a window and returns the stored window.
    async fn update_window(&self, id: WindowId, window: &Window) -> Result<Window, ApiError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_resource() {
        let err = ApiError::NotFound {
            resource: "room 42".to_string(),
        };
        assert_eq!(err.to_string(), "room 42 not found");
    }

    #[test]
    fn test_status_message_includes_code_and_url() {
        let err = ApiError::Status {
            status: 500,
            url: "http://127.0.0.1:8080/api/rooms".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/api/rooms"));
    }

    #[test]
    fn test_decode_error_converts_from_serde_json() {
        // Arrange
        let serde_err = serde_json::from_str::<Room>("not json").unwrap_err();

        // Act
        let err: ApiError = serde_err.into();

        // Assert
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
