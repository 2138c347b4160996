use std::{fs, io::ErrorKind, path::Path};

use serde::Deserialize;
use shared::protocol::DEFAULT_SALE_STATUS;
use tracing::warn;
use url::Url;
use views::{OrderColumn, SortDirection, SortSpec};

use crate::DEFAULT_API_BASE_URL;

pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub orders_sort: SortSpec,
    pub summary_status: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            orders_sort: SortSpec::default(),
            summary_status: DEFAULT_SALE_STATUS.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    api: ApiSection,
    orders: OrdersSection,
    summary: SummarySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrdersSection {
    order_by: Option<String>,
    direction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SummarySection {
    status: Option<String>,
}

impl Settings {
    /// Keeps the current value and returns `false` when `raw` is not an
    /// absolute http(s) URL.
    pub fn set_api_base_url(&mut self, raw: &str) -> bool {
        match Url::parse(raw.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                self.api_base_url = url.as_str().trim_end_matches('/').to_string();
                true
            }
            _ => {
                warn!(value = raw, "ignoring invalid api base url");
                false
            }
        }
    }

    pub fn set_order_by(&mut self, raw: &str) -> bool {
        match raw.parse::<OrderColumn>() {
            Ok(column) => {
                self.orders_sort.column = column;
                true
            }
            Err(err) => {
                warn!(%err, "ignoring orders sort column");
                false
            }
        }
    }

    pub fn set_direction(&mut self, raw: &str) -> bool {
        match raw.parse::<SortDirection>() {
            Ok(direction) => {
                self.orders_sort.direction = direction;
                true
            }
            Err(err) => {
                warn!(%err, "ignoring orders sort direction");
                false
            }
        }
    }

    pub fn set_summary_status(&mut self, raw: &str) -> bool {
        let status = raw.trim();
        if status.is_empty() {
            warn!("ignoring empty summary status");
            return false;
        }
        self.summary_status = status.to_string();
        true
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.api.base_url {
            self.set_api_base_url(&v);
        }
        if let Some(v) = file.orders.order_by {
            self.set_order_by(&v);
        }
        if let Some(v) = file.orders.direction {
            self.set_direction(&v);
        }
        if let Some(v) = file.summary.status {
            self.set_summary_status(&v);
        }
    }
}

pub fn load_settings(path: Option<&Path>) -> Settings {
    load_settings_with(path, |name| std::env::var(name).ok())
}

/// Defaults, then the TOML file (`dashboard.toml` unless `path` is given),
/// then environment variables read through `env`.
pub fn load_settings_with(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    let file_path = path.unwrap_or(Path::new(DEFAULT_SETTINGS_FILE));
    match fs::read_to_string(file_path) {
        Ok(raw) => match toml::from_str::<FileSettings>(&raw) {
            Ok(file) => settings.apply_file(file),
            Err(err) => {
                warn!(path = %file_path.display(), %err, "ignoring malformed settings file")
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound && path.is_none() => {}
        Err(err) => warn!(path = %file_path.display(), %err, "could not read settings file"),
    }

    if let Some(v) = env("DASHBOARD_API_URL") {
        settings.set_api_base_url(&v);
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.set_api_base_url(&v);
    }
    if let Some(v) = env("APP__ORDERS_ORDER_BY") {
        settings.set_order_by(&v);
    }
    if let Some(v) = env("APP__ORDERS_DIRECTION") {
        settings.set_direction(&v);
    }
    if let Some(v) = env("APP__SUMMARY_STATUS") {
        settings.set_summary_status(&v);
    }

    settings
}
