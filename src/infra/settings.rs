use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::usecase::ports::user_api::ApiError;

pub const DEFAULT_ENDPOINT: &str = "https://mixolydian-appendix.glitch.me/user";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub page_size: u64,
    pub request_timeout_secs: u64,
    /// Extra attempts for a fetch that failed in transport. Updates never retry.
    pub fetch_retries: u32,
    pub log_filter: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: 10,
            request_timeout_secs: 30,
            fetch_retries: 1,
            log_filter: "info,user_grid=debug".to_string(),
            window_title: "Users".to_string(),
        }
    }
}

impl Settings {
    pub fn endpoint_url(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|err| ApiError::InvalidEndpoint(format!("{}: {err}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                self.endpoint
            )));
        }
        Ok(url)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size.max(1)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "user-grid")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(SETTINGS_FILE_NAME))
}

/// Missing file means defaults; a present but unreadable file is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings: {}", path.display()))?;
    settings
        .endpoint_url()
        .with_context(|| format!("invalid endpoint in {}", path.display()))?;
    Ok(settings)
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
