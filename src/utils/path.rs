use std::path::PathBuf;

/// Environment variable that redirects the config directory (used by tests and
/// by users who keep several accounts side by side).
pub const CONFIG_DIR_ENV: &str = "LAVAJATO_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/lavajato regardless of OS, unless overridden)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    get_home_dir().join(".config").join("lavajato")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the persisted session path
pub fn get_session_path() -> PathBuf {
    get_config_dir().join("session.json")
}

/// Get the directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("lavajato")
}

/// Expand a user-supplied path, handling a leading ~
///
/// # Arguments
/// * `path_str` - Path string that may start with ~
///
/// # Returns
/// Expanded PathBuf. Relative paths are left relative to the working directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else if path_str == "~" {
        get_home_dir()
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_home() {
        assert_eq!(expand_path("~"), get_home_dir());
        assert_eq!(expand_path("~/car.png"), get_home_dir().join("car.png"));
    }

    #[test]
    fn test_expand_path_passthrough() {
        assert_eq!(expand_path("/tmp/car.png"), PathBuf::from("/tmp/car.png"));
        assert_eq!(expand_path("car.png"), PathBuf::from("car.png"));
    }

    #[test]
    fn test_session_lives_next_to_config() {
        assert_eq!(
            get_session_path().parent(),
            get_config_path().parent()
        );
    }
}
