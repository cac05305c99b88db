//! Service adapters: OS/runtime specific implementations (IO, cookies).

pub mod paths;
pub mod settings;
pub mod tab_store;

pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{ensure_settings_file, get_settings_path, load_settings_from};
pub use tab_store::{CookieTabStore, MemoryTabStore};
