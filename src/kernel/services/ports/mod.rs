//! Service ports: traits + data contracts.

pub mod config;
pub mod settings;
pub mod tab_store;

pub use config::ViewerConfig;
pub use settings::Settings;
pub use tab_store::TabStore;
