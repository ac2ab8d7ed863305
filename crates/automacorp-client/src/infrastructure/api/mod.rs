//! Implementations of the `RoomsApi` port.
//!
//! - [`HttpRoomsApi`] talks to the real REST service over HTTP(S).
//! - [`InMemoryRoomsApi`] keeps rooms and windows in memory and can be
//!   switched offline to exercise failure paths.

pub mod http;
pub mod in_memory;

pub use http::HttpRoomsApi;
pub use in_memory::InMemoryRoomsApi;

pub use crate::application::rooms_api::ApiError;
