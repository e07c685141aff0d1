use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "prospect_finder=warn";
const VERBOSE_FILTER: &str = "prospect_finder=debug";

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug with `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
