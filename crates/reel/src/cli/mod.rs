//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog, not the application
//! itself. The HTTP server in [`crate::server`] is the other.
//!
//! ## Naked Execution (`reel`)
//!
//! Running `reel` with no arguments defaults to `reel list`.
//!
//! ## Catalog Location
//!
//! The catalog file comes from the `database_file` setting (default
//! `./movies.json`). `--data <path>` overrides it for one invocation. The file
//! is created on first use.
//!
//! ## Output
//!
//! Human-readable tables and messages by default; `--json` prints
//! `{ "movies": [...], "messages": [...] }` instead. Errors always go to
//! stderr with exit code 1. An empty filter result is not an error: it prints
//! a "No movies found ..." message and exits 0.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and dispatch to the API facade
//! - `render`: output formatting (tables, details, messages, JSON)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
