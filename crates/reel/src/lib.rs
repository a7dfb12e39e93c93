//! # reel clients
//!
//! Two UI clients over the same `reelapp` catalog:
//!
//! ```text
//! ┌───────────────────────────┐   ┌───────────────────────────────┐
//! │  CLI (cli/)               │   │  HTTP server (server/)        │
//! │  - clap parsing           │   │  - axum router under /api/v1  │
//! │  - terminal / JSON output │   │  - JSON envelopes + errors    │
//! └───────────────────────────┘   └───────────────────────────────┘
//!               │                                 │
//!               └────────────────┬────────────────┘
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  reelapp::api::CatalogApi (commands, validation, store)         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both clients get their catalog from `reelapp::init`; neither reaches past
//! the API facade.

pub mod cli;
pub mod server;
pub mod telemetry;
