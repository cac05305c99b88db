use compact_str::CompactString;
use std::fmt;

use crate::models::Catalog;

#[derive(Debug)]
pub enum TabStateError {
    Malformed(serde_json::Error),
}

impl fmt::Display for TabStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabStateError::Malformed(err) => write!(f, "malformed tab state: {}", err),
        }
    }
}

impl std::error::Error for TabStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TabStateError::Malformed(err) => Some(err),
        }
    }
}

/// Ordered list of open file names; a name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    names: Vec<CompactString>,
}

impl TabState {
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<CompactString>,
    {
        let mut state = Self::default();
        for name in names {
            state.push_if_absent(name.into());
        }
        state
    }

    pub fn single(name: impl Into<CompactString>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// Parse persisted state: a JSON array of strings. Later duplicates are dropped.
    pub fn parse(raw: &str) -> Result<Self, TabStateError> {
        let names: Vec<CompactString> =
            serde_json::from_str(raw).map_err(TabStateError::Malformed)?;
        Ok(Self::new(names))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.names).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn names(&self) -> &[CompactString] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(|name| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Append `name` at the end unless it is already open.
    pub fn push_if_absent(&mut self, name: CompactString) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop names the catalog no longer serves; returns what was dropped.
    pub fn retain_known(&mut self, catalog: &Catalog) -> Vec<CompactString> {
        let mut dropped = Vec::new();
        self.names.retain(|name| {
            let known = catalog.contains(name);
            if !known {
                dropped.push(name.clone());
            }
            known
        });
        dropped
    }
}
