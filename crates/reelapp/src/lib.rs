//! # reelapp
//!
//! UI-agnostic core of the `reel` movie catalog. Both clients (the command line
//! and the HTTP server in the `reel` crate) go through the same layers:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                       │
//! │  - Single entry point for every catalog operation          │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                │
//! │  - Validation, messages, structured `CmdResult` values     │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Store (store/*)                                           │
//! │  - In-memory id -> Movie mapping                           │
//! │  - Full-document JSON rewrite after every mutation         │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate prints to stdout or installs a log subscriber; it only
//! emits `tracing` events and returns `Result`s.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
