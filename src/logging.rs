use once_cell::sync::OnceCell;
use tracing::info;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// One time logging init, safe to call from every manager constructor.
pub fn init() {
    INIT.get_or_init(|| {
        // route `log` records from dependencies into tracing
        let _ = tracing_log::LogTracer::init();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);

        info!(
            version = env!("CARGO_PKG_VERSION"),
            git = env!("GIT_SHORT_HASH"),
            profile = env!("BUILD_PROFILE"),
            "logging initialized"
        );
    });
}

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) { "taplog=debug" } else { "taplog=info" }
}
