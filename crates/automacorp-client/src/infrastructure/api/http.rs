//! HttpRoomsApi: the reqwest implementation of [`RoomsApi`].
//!
//! Every operation builds exactly one request against the configured base URL,
//! sends it, checks the status, and decodes the body.  There is no retry, no
//! cache, and no timeout beyond reqwest's transport defaults.
//!
//! # URL resolution
//!
//! Resource paths are relative (`rooms`, `rooms/1/windows`, `windows/10`) and
//! are joined onto the base URL.  The base URL's path always gets a trailing
//! `/` first, otherwise `Url::join` would replace its last segment:
//!
//! ```text
//! http://host:8080/api   + rooms  ->  http://host:8080/rooms      (wrong)
//! http://host:8080/api/  + rooms  ->  http://host:8080/api/rooms  (right)
//! ```
//!
//! # Status handling
//!
//! - 2xx → body decoded with `serde_json` (decode failures become
//!   [`ApiError::Decode`]).
//! - 404 → [`ApiError::NotFound`] naming the resource.
//! - anything else → [`ApiError::Status`].

use async_trait::async_trait;
use automacorp_core::{Room, RoomCommand, RoomId, Window, WindowId};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::application::rooms_api::{ApiError, RoomsApi};
use crate::infrastructure::config::ClientConfig;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

/// Stateless REST client for the rooms/windows resources.
#[derive(Debug, Clone)]
pub struct HttpRoomsApi {
    client: Client,
    base_url: Url,
}

impl HttpRoomsApi {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` is not an absolute URL,
    /// or [`ApiError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Creates a client from the loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    /// Creates a client that reuses an existing reqwest [`Client`] (and its
    /// connection pool).
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{base_url}: not usable as a base URL"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// The normalised base URL (always ending in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative resource path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "sending request");
        Ok(self.client.request(method, url))
    }

    /// Sends the request and maps non-2xx statuses to errors.
    async fn execute(&self, request: RequestBuilder, resource: &str) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!(url = %response.url(), "{resource} not found");
            return Err(ApiError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            warn!(url = %response.url(), %status, "request for {resource} failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }

    /// Sends the request and decodes a JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, ApiError> {
        let response = self.execute(request, resource).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RoomsApi for HttpRoomsApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        let request = self.request(Method::GET, "rooms")?;
        self.fetch(request, "rooms").await
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, ApiError> {
        let request = self.request(Method::GET, &format!("rooms/{id}"))?;
        self.fetch(request, &format!("room {id}")).await
    }

    async fn update_room(&self, id: RoomId, command: &RoomCommand) -> Result<Room, ApiError> {
        let request = self.request(Method::PUT, &format!("rooms/{id}"))?.json(command);
        self.fetch(request, &format!("room {id}")).await
    }

    async fn create_room(&self, room: &Room) -> Result<Room, ApiError> {
        let request = self.request(Method::POST, "rooms")?.json(room);
        self.fetch(request, "rooms").await
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("rooms/{id}"))?;
        // The response body is empty (or irrelevant); only the status matters.
        self.execute(request, &format!("room {id}")).await?;
        Ok(())
    }

    async fn list_windows(&self, room_id: RoomId) -> Result<Vec<Window>, ApiError> {
        let request = self.request(Method::GET, &format!("rooms/{room_id}/windows"))?;
        self.fetch(request, &format!("windows of room {room_id}"))
            .await
    }

    async fn update_window(&self, id: WindowId, window: &Window) -> Result<Window, ApiError> {
        let request = self.request(Method::PUT, &format!("windows/{id}"))?.json(window);
        self.fetch(request, &format!("window {id}")).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
