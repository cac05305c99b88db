//! Catalog resolution: request path -> file record, plus content negotiation.

use std::fmt;

use crate::models::{Catalog, FileRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    NotFound { path: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound { path } => write!(f, "File not found: {}", path),
        }
    }
}

impl std::error::Error for ResolveError {}

/// What the client gets back for a resolved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiated {
    /// Full page with sidebar, tab strip and highlighted code.
    Html,
    /// The raw file content, no page chrome.
    Raw,
}

impl Negotiated {
    pub fn from_accept(accept: Option<&str>) -> Self {
        match accept {
            Some(value) if value.contains("text/html") => Negotiated::Html,
            _ => Negotiated::Raw,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Negotiated::Html => "html",
            Negotiated::Raw => "raw",
        }
    }
}

pub struct Resolver<'a> {
    catalog: &'a Catalog,
    home: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, home: &'a str) -> Self {
        Self { catalog, home }
    }

    /// `path` comes without its leading `/` (the router strips it); an empty path means the
    /// home file. Anything else is looked up verbatim, so `//index.html` arrives here as
    /// `/index.html` and is not found.
    pub fn normalize<'p>(&self, path: &'p str) -> &'p str
    where
        'a: 'p,
    {
        if path.is_empty() {
            self.home
        } else {
            path
        }
    }

    pub fn resolve(&self, path: &str) -> Result<&'a FileRecord, ResolveError> {
        let name = self.normalize(path);
        self.catalog.get(name).ok_or_else(|| ResolveError::NotFound {
            path: name.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/resolver.rs"]
mod tests;
