use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "ARGON2JNI_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installed at most once per process, on library load.
static SUBSCRIBER: Lazy<()> = Lazy::new(|| {
    let filter = filter(std::env::var(LOG_ENV).ok().as_deref());
    // The embedding process may already own the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
});

pub(crate) fn init() {
    Lazy::force(&SUBSCRIBER);
}

fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
