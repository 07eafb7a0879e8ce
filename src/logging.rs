use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts stderr logging once per process. `RUST_LOG` overrides the
/// build-mode default. Initialization failure is not fatal; the app
/// just runs without diagnostics.
pub fn init() {
    let result = LOGGER.get_or_try_init(|| {
        Logger::try_with_env_or_str(default_level())?
            .log_to_stderr()
            .start()
    });

    if let Err(error) = result {
        eprintln!("notemap: logging disabled: {error}");
    }
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::{default_level, init};

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn default_level_matches_build_mode() {
        let level = default_level();
        assert!(level == "debug" || level == "info");
    }
}
