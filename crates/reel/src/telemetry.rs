use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "reel=info,reelapp=info,tower_http=info";
const VERBOSE_FILTER: &str = "reel=debug,reelapp=debug,tower_http=debug";

/// Initialize logging. Events go to stderr so stdout stays clean for output.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the debug filter.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
