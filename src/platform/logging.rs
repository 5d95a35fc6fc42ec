//! Logger setup for hosts that do not bring their own.

use once_cell::sync::OnceCell;

pub const LOG_TAG: &str = "gl33core";

static INIT: OnceCell<()> = OnceCell::new();

/// Routes `log` output to the platform log (logcat, os_log). Idempotent.
///
/// On other platforms this does nothing; install any `log` backend instead.
pub fn init() {
    INIT.get_or_init(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag(LOG_TAG),
        );

        // Fails only when the host installed a logger first; keep theirs.
        #[cfg(target_os = "ios")]
        let _ = oslog::OsLogger::new("dev.gl33core")
            .level_filter(log::LevelFilter::Debug)
            .category_level_filter(LOG_TAG, log::LevelFilter::Debug)
            .init();

        log::debug!("{LOG_TAG} logging initialized");
    });
}
