use std::io;

use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forward the first SIGINT/SIGTERM to `tx`; if the process is still alive after the grace
/// period it exits with the signal's conventional code.
#[cfg(unix)]
pub fn install_termination_signals(
    tx: oneshot::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let mut tx = Some(tx);
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };

            if let Some(tx) = tx.take() {
                let _ = tx.send(signal);
            }

            // Grace period for draining connections.
            std::thread::sleep(Duration::from_secs(5));
            tracing::warn!("graceful shutdown timed out");
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    tx: oneshot::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    // Keep the sender alive so the receiver never resolves on its own.
    Ok(std::thread::spawn(move || {
        let _tx = tx;
        loop {
            std::thread::park();
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/app/shutdown.rs"]
mod tests;
