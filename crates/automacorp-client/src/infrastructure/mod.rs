//! Infrastructure layer for the automacorp client.
//!
//! Contains the adapters around the application layer: the HTTP
//! implementation of `RoomsApi`, configuration loading, logging setup, the
//! background execution pool, and the presentation bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `automacorp_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`api`** – `HttpRoomsApi` (reqwest) and `InMemoryRoomsApi`, a fake
//!   backend for tests and offline UI hosts.
//!
//! - **`config`** – `ClientConfig`: base URL, worker pool size, and notice
//!   channel capacity, with defaults and environment overrides.
//!
//! - **`logging`** – installs the `tracing` subscriber.
//!
//! - **`runtime`** – `BackgroundPool`, the fixed-size I/O pool that
//!   `RoomSync` spawns its actions onto.
//!
//! - **`ui_bridge`** – display-ready DTOs and intent functions for the UI.

pub mod api;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod ui_bridge;
