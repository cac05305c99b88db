//! 应用层：HTTP 路由、启动参数、服务器生命周期

pub mod handler;
pub mod server;
pub mod shutdown;
pub mod startup;
pub mod state;

pub use handler::router;
pub use server::{start_server, RunningServer, ServerError};
pub use shutdown::{install_termination_signals, TerminationSignal};
pub use startup::{resolve_startup, CatalogSource, Startup, StartupError};
pub use state::AppState;
