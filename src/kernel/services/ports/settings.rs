use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::config::ViewerConfig;
use crate::models::HOME_FILE;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_TAB_COOKIE: &str = "zview_tabs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Served for `/` and used as the fallback navigation target.
    pub home_file: String,
    /// Name of the cookie holding the open-tab list.
    pub tab_cookie: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub viewer: ViewerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            home_file: HOME_FILE.to_string(),
            tab_cookie: DEFAULT_TAB_COOKIE.to_string(),
            catalog: None,
            viewer: ViewerConfig::default(),
        }
    }
}

impl Settings {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
