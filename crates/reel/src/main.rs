//! # reel
//!
//! The binary is intentionally thin: it only invokes [`reel::cli::run`] and
//! handles process termination. Everything else lives in the `reel` library
//! (the CLI and HTTP clients) and in `reelapp` (the catalog itself).

fn main() {
    if let Err(e) = reel::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
