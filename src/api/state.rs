//! Shared router state

use crate::config::Config;
use crate::handlers::DEFAULT_BALANCE_PAGE_SIZE;
use crate::storage::DynStorage;

/// Paging knobs taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiSettings {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub balance_page_size: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 1000,
            balance_page_size: DEFAULT_BALANCE_PAGE_SIZE,
        }
    }
}

impl From<&Config> for ApiSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            balance_page_size: config.balance_page_size,
        }
    }
}

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub storage: DynStorage,
    pub settings: ApiSettings,
}

impl AppState {
    pub fn new(storage: DynStorage) -> Self {
        Self {
            storage,
            settings: ApiSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }
}
