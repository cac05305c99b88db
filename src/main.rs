use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::oneshot;
use zview::app::{install_termination_signals, resolve_startup, start_server, AppState};
use zview::kernel::services::adapters::{ensure_settings_file, load_settings_from};
use zview::kernel::services::ports::Settings;

mod logging;

fn main() -> ExitCode {
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let settings = match ensure_settings_file() {
        Ok(path) => load_settings_from(&path).unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "settings unavailable, using defaults");
            Settings::default()
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("zview: cannot read current directory: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let catalog_arg = std::env::args().nth(1);
    let port_override = std::env::var("ZVIEW_PORT").ok();

    let startup = match resolve_startup(
        settings,
        &cwd,
        catalog_arg.as_deref(),
        port_override.as_deref(),
    ) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            eprintln!("zview: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(catalog = %startup.source, files = startup.catalog.len(), "catalog ready");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("zview: failed to start runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (signal_tx, signal_rx) = oneshot::channel();
    if let Err(err) = install_termination_signals(signal_tx) {
        tracing::warn!(error = %err, "signal handlers unavailable");
    }

    let state = Arc::new(AppState::new(startup.catalog, startup.settings));
    let code = runtime.block_on(async move {
        let server = match start_server(state).await {
            Ok(server) => server,
            Err(err) => {
                tracing::error!(error = %err, "server failed to start");
                eprintln!("zview: {}", err);
                return ExitCode::FAILURE;
            }
        };
        println!("zview listening on http://{}", server.bound_addr());

        let stop = async {
            match signal_rx.await {
                Ok(signal) => tracing::info!(?signal, "termination signal"),
                Err(_) => std::future::pending::<()>().await,
            }
        };

        match server.run_until(stop).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(error = %err, "server stopped with an error");
                ExitCode::FAILURE
            }
        }
    });

    drop(logging);
    code
}
