use std::path::PathBuf;

/// Data directory for logs and session files.
/// Uses ~/.local/share/scamlens on unix (XDG) for consistency across
/// macOS and Linux; platform data dir elsewhere.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local")
            .join("share")
            .join("scamlens")
    }
    #[cfg(not(unix))]
    {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("scamlens")
    }
}

/// Config directory holding config.toml.
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".config")
            .join("scamlens")
    }
    #[cfg(not(unix))]
    {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("scamlens")
    }
}
