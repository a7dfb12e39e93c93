//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading from
//! TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `REEL__PORT`, `REEL__DATABASE_FILE`, etc.
//! 2. **Local Config**: `./reel.toml` in the working directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `app_name` | `Movie Catalog API` | Name reported by the server |
//! | `app_version` | `1.0.0` | Version reported by the server |
//! | `debug` | `false` | Verbose logging |
//! | `host` | `0.0.0.0` | Address `reel serve` binds to |
//! | `port` | `8000` | Port `reel serve` binds to |
//! | `cors_origins` | `["*"]` | Origins allowed by the CORS layer |
//! | `database_file` | `movies.json` | Catalog file, relative to the working directory |

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for reel, stored in `reel.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReelConfig {
    /// Name reported by the server
    #[config(default = "Movie Catalog API")]
    pub app_name: String,

    /// Version reported by the server
    #[config(default = "1.0.0")]
    pub app_version: String,

    /// Verbose logging
    #[config(default = false)]
    pub debug: bool,

    /// Address the HTTP server binds to
    #[config(default = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server binds to
    #[config(default = 8000)]
    pub port: u16,

    /// Origins allowed to call the HTTP API. "*" allows any origin.
    #[config(default = ["*"])]
    pub cors_origins: Vec<String>,

    /// Catalog file. Relative paths resolve against the working directory.
    #[config(default = "movies.json")]
    pub database_file: String,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            app_name: "Movie Catalog API".to_string(),
            app_version: "1.0.0".to_string(),
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            database_file: "movies.json".to_string(),
        }
    }
}

/// The subset of settings safe to show to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigSummary {
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
}

impl ReelConfig {
    /// `host:port` for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o.trim() == "*")
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            app_name: self.app_name.clone(),
            app_version: self.app_version.clone(),
            debug: self.debug,
        }
    }
}
