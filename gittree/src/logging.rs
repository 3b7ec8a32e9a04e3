use gittree_core::config::APP_NAME;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "gittree.log";
const MAX_LOG_SIZE_MB: u64 = 10;
const LOG_ROLL_COUNT: u32 = 5;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn cache_dir() -> PathBuf {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return PathBuf::from(xdg_cache_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".cache")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_NAME)
    }
}

pub fn default_log_file() -> PathBuf {
    cache_dir().join(LOG_FILE_NAME)
}

/// Send `log` output to the cache-dir log file. The terminal belongs to the UI, so
/// nothing is ever logged to stdout or stderr.
pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    if level == log::LevelFilter::Off {
        return Ok(());
    }
    let log_file = default_log_file();
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(
        log_file.to_string_lossy().into_owned(),
        level.as_str(),
        MAX_LOG_SIZE_MB,
        LOG_ROLL_COUNT,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("gittree {} logging to {}", env!("CARGO_PKG_VERSION"), log_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches XDG_CACHE_HOME so parallel tests never race on it.
    #[test]
    fn cache_dir_follows_xdg_cache_home() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("custom-cache");

        unsafe { std::env::set_var("XDG_CACHE_HOME", &custom) };
        let overridden = cache_dir();
        unsafe { std::env::set_var("XDG_CACHE_HOME", "") };
        let fallback = cache_dir();
        unsafe { std::env::remove_var("XDG_CACHE_HOME") };

        assert_eq!(overridden, custom.join(APP_NAME));
        assert!(
            fallback.ends_with(format!(".cache/{APP_NAME}").as_str()),
            "expected default .cache/gittree path, got: {fallback:?}"
        );
    }

    #[test]
    fn log_file_lives_in_app_cache_dir() {
        let path = default_log_file();
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }
}
