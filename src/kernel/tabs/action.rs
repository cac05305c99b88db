use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// A page load for `current`: make sure it is open and active.
    Reconcile { current: CompactString },
    /// A sidebar entry or tab was selected. In the HTML page this is a plain link, so the
    /// browser performs the navigation itself and the server only sees the next Reconcile.
    Navigate { name: CompactString },
    /// The close control of a tab was used.
    Close { name: CompactString },
}
