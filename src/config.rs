//! App Configuration
//!
//! Compiled defaults; there are no config files or environment variables.

/// Public JSONPlaceholder deployment.
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL the `/todos` paths are appended to, without trailing slash
    pub api_base: String,
    pub audio: AudioConfig,
    pub user_icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub check_src: String,
    pub uncheck_src: String,
    /// Volume for the check cue, `0.0..=1.0`
    pub check_volume: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            audio: AudioConfig::default(),
            user_icon: "/book.png".to_string(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            check_src: "/pencil-check.mp3".to_string(),
            uncheck_src: "/pencil-eraser.mp3".to_string(),
            check_volume: 0.2,
        }
    }
}

impl AppConfig {
    /// Same defaults, different API host.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { api_base, ..Self::default() }
    }
}
