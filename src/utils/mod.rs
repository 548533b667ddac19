use std::{env, path::PathBuf, sync::Once};

const APP_DIR_NAME: &str = "ledger_sheets";
const EXPORT_DIR: &str = "exports";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ledger_sheets=info"));

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Directory that receives exported reports when none is configured.
///
/// Uses the platform cache directory, falling back to the system temp dir.
pub fn default_export_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
        .join(EXPORT_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_dir_is_namespaced() {
        let dir = default_export_dir();
        assert!(dir.ends_with("ledger_sheets/exports"));
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
