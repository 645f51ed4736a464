use std::sync::Arc;

use chrono::{DateTime, Local};

mod app;
mod domain {
    pub mod entities {
        pub mod edit;
        pub mod grid;
        pub mod user;
    }
}
mod infra {
    pub mod http {
        pub mod client;
        pub mod envelope;
        pub mod query;
    }
    pub mod settings;
}
mod platform {
    pub mod desktop {
        pub mod logging;
    }
}
mod ui {
    pub mod state {
        pub mod app_state;
        pub mod selection;
    }
}
mod usecase {
    pub mod ports {
        pub mod user_api;
    }
    pub mod services {
        pub mod grid_service;
    }
}


use crate::domain::entities::grid::page_count;
use crate::infra::http::client::HttpUserApi;
use crate::infra::settings::{default_settings_path, load_settings, Settings};
use crate::usecase::ports::user_api::ApiError;
use crate::usecase::services::grid_service::GridService;

fn main() {
    let settings = startup_settings();
    platform::desktop::logging::init_logging(&settings.log_filter);
    tracing::info!(endpoint = %settings.endpoint, page_size = settings.page_size(), "starting");

    let webview_data_dir = infra::settings::default_webview_data_dir()
        .expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(settings.window_title.clone()),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(settings)
        .launch(app::App);
}

/// Logging is not up yet, so a bad settings file is reported on stderr.
fn startup_settings() -> Settings {
    match default_settings_path().and_then(|path| load_settings(&path)) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("using default settings: {err:#}");
            Settings::default()
        }
    }
}

pub fn build_grid_service(settings: &Settings) -> Result<Arc<GridService>, ApiError> {
    let endpoint = settings.endpoint_url()?;
    let api = HttpUserApi::new(endpoint, settings.request_timeout())?;
    Ok(Arc::new(GridService::new(
        Arc::new(api),
        settings.fetch_retries,
    )))
}

pub fn pager_label(page: u64, total_rows: u64, page_size: u64) -> String {
    let pages = page_count(total_rows, page_size);
    format!("Page {} / {} ({} rows)", page + 1, pages, total_rows)
}

pub fn loaded_status(row_count: usize, loaded_at: DateTime<Local>) -> String {
    format!("Loaded {row_count} rows at {}", loaded_at.format("%H:%M:%S"))
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: row; gap: 12px; overflow: hidden; padding: 8px; box-sizing: border-box; font-family: sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; height: 500px; overflow: auto; border: 1px solid #bbb;"
}

pub fn table_header_cell_style(resizable: bool) -> String {
    let base = "position: sticky; top: 0; z-index: 2; background: #f3f3f3; border: 1px solid #bbb; padding: 4px; text-align: left;";
    if resizable {
        format!("{base} resize: horizontal; overflow: hidden; min-width: 80px;")
    } else {
        base.to_string()
    }
}

pub fn detail_panel_style() -> &'static str {
    "height: 500px; overflow: auto; min-width: 320px;"
}

pub fn detail_group_style() -> &'static str {
    "margin: 5px; padding: 10px; border: 1px solid grey;"
}

pub fn error_banner_style() -> &'static str {
    "background: #fde8e8; color: #a11; border: 1px solid #d24; padding: 6px 10px; margin: 6px 0;"
}
