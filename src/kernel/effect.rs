use compact_str::CompactString;

/// Side effects requested by the tab reducer; executed by the session or the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the serialized tab list to the client-owned store.
    PersistTabs(String),
    /// Full page navigation to `/<name>`.
    Navigate(CompactString),
    /// Re-render the tab strip in place.
    RenderTabs,
}
