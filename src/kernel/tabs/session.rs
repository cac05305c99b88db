use compact_str::CompactString;

use super::state::TabState;
use crate::kernel::services::ports::TabStore;
use crate::models::Catalog;

/// One rendered tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub name: CompactString,
    pub type_tag: CompactString,
    pub active: bool,
}

/// Tab bookkeeping for a single page load.
///
/// The open-tab list lives in a client-owned [`TabStore`]; a session loads it, applies the
/// actions of one navigation and writes it back after every mutation.
pub struct TabSession<'c, S> {
    pub(super) catalog: &'c Catalog,
    pub(super) home: CompactString,
    pub(super) store: S,
    pub(super) tabs: TabState,
    pub(super) active: Option<CompactString>,
}

impl<S> std::fmt::Debug for TabSession<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabSession")
            .field("home", &self.home)
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .finish()
    }
}

impl<'c, S: TabStore> TabSession<'c, S> {
    /// Read persisted tabs; absent or unreadable state falls back to `[home]`.
    pub fn load(catalog: &'c Catalog, home: &str, store: S) -> Self {
        let tabs = match store.load() {
            None => TabState::single(home),
            Some(raw) => match TabState::parse(&raw) {
                Ok(tabs) => tabs,
                Err(err) => {
                    tracing::debug!(error = %err, "resetting unreadable tab state");
                    TabState::single(home)
                }
            },
        };

        Self {
            catalog,
            home: CompactString::from(home),
            store,
            tabs,
            active: None,
        }
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The tab strip in tab order, with the active entry marked.
    pub fn tab_strip(&self) -> Vec<TabEntry> {
        self.tabs
            .iter()
            .map(|name| TabEntry {
                name: CompactString::from(name),
                type_tag: self
                    .catalog
                    .get(name)
                    .map(|record| CompactString::from(record.type_tag()))
                    .unwrap_or_else(|| CompactString::from("txt")),
                active: self.active.as_deref() == Some(name),
            })
            .collect()
    }
}
