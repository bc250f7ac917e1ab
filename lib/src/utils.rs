use std::path::PathBuf;

/// Directory the bookmark snapshot lives in by default.
pub fn get_default_datadir() -> PathBuf {
    if let Ok(path) = std::env::var("LINKSTASH_DATA_DIR") {
        return PathBuf::from(path);
    }
    app_dir("XDG_DATA_HOME", ".local/share")
}

/// Directory the config file lives in.
pub fn get_config_dir() -> PathBuf {
    app_dir("XDG_CONFIG_HOME", ".config")
}

fn app_dir(xdg_var: &str, home_fallback: &str) -> PathBuf {
    if let Ok(path) = std::env::var(xdg_var) {
        return PathBuf::from(path).join("linkstash");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(home_fallback).join("linkstash");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkstash");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
