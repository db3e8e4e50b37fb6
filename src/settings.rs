//! User settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub server_url: Option<String>,

    // Paths
    pub export_path: Option<String>,
}

impl Settings {
    fn file_path(data_dir: &Path) -> PathBuf {
        data_dir.join("settings.json")
    }

    pub fn load(data_dir: &Path) -> Self {
        let path = Self::file_path(data_dir);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            debug!("No settings file found, using defaults");
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to parse settings, using defaults");
            Self::default()
        })
    }

    pub fn save(&self, data_dir: &Path) {
        let path = Self::file_path(data_dir);
        let result = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        match result {
            Ok(()) => debug!(path = %path.display(), "Settings saved"),
            Err(e) => warn!(error = %e, "Failed to save settings"),
        }
    }

    pub fn server_url_or_default(&self) -> String {
        self.server_url
            .as_deref()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| crate::constants::DEFAULT_SERVER_URL.to_string())
    }

    /// Configured export directory, if any. None means ask with a save dialog.
    pub fn export_dir(&self) -> Option<PathBuf> {
        self.export_path
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_default_and_trailing_slash() {
        let mut settings = Settings::default();
        assert_eq!(settings.server_url_or_default(), crate::constants::DEFAULT_SERVER_URL);
        settings.server_url = Some("http://10.0.0.2:8080/".into());
        assert_eq!(settings.server_url_or_default(), "http://10.0.0.2:8080");
        settings.server_url = Some("".into());
        assert_eq!(settings.server_url_or_default(), crate::constants::DEFAULT_SERVER_URL);
    }

    #[test]
    fn export_dir_ignores_blank_path() {
        let mut settings = Settings::default();
        assert!(settings.export_dir().is_none());
        settings.export_path = Some("  ".into());
        assert!(settings.export_dir().is_none());
        settings.export_path = Some("/tmp/exports".into());
        assert_eq!(settings.export_dir().unwrap(), PathBuf::from("/tmp/exports"));
    }
}
