//! Open-tab bookkeeping: load, reconcile, close, persist.

pub mod action;
mod reducer;
pub mod session;
pub mod state;

pub use action::TabAction;
pub use session::{TabEntry, TabSession};
pub use state::{TabState, TabStateError};

#[cfg(test)]
#[path = "../../../tests/unit/kernel/tabs/state.rs"]
mod tests;
