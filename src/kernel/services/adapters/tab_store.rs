use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::kernel::services::ports::TabStore;

/// In-process store, used by tests and by callers without a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTabStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryTabStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TabStore for MemoryTabStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: String) {
        self.value = Some(value);
        self.writes += 1;
    }
}

/// Keeps the tab list in a browser cookie; saving queues a `Set-Cookie` on the jar.
#[derive(Debug, Clone)]
pub struct CookieTabStore {
    jar: CookieJar,
    cookie_name: String,
}

impl CookieTabStore {
    pub fn new(jar: CookieJar, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl TabStore for CookieTabStore {
    fn load(&self) -> Option<String> {
        self.jar
            .get(&self.cookie_name)
            .map(|cookie| cookie.value().to_string())
    }

    fn save(&mut self, value: String) {
        let cookie = Cookie::build((self.cookie_name.clone(), value))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .build();
        self.jar = std::mem::replace(&mut self.jar, CookieJar::new()).add(cookie);
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/tab_store.rs"]
mod tests;
