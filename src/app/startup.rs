//! 启动参数解析：目录来源、端口覆盖

use std::fmt;
use std::path::{Path, PathBuf};

use crate::kernel::services::adapters::settings::parse_port;
use crate::kernel::services::ports::Settings;
use crate::models::{Catalog, CatalogError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => f.write_str("built-in"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct Startup {
    pub settings: Settings,
    pub catalog: Catalog,
    pub source: CatalogSource,
}

#[derive(Debug)]
pub struct StartupError {
    pub source: CatalogSource,
    pub error: CatalogError,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog {}: {}", self.source, self.error)
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Pick the catalog (command line, then settings, then the built-in demo) and apply the
/// port override. Relative paths are resolved against `cwd`.
pub fn resolve_startup(
    mut settings: Settings,
    cwd: &Path,
    catalog_arg: Option<&str>,
    port_override: Option<&str>,
) -> Result<Startup, StartupError> {
    if let Some(raw) = port_override {
        match parse_port(raw) {
            Some(port) => settings = settings.with_port(port),
            None => tracing::warn!(value = raw, "ignoring invalid port override"),
        }
    }

    let source = match catalog_arg
        .filter(|arg| !arg.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| settings.catalog.clone())
    {
        Some(path) if path.is_absolute() => CatalogSource::File(path),
        Some(path) => CatalogSource::File(cwd.join(path)),
        None => CatalogSource::Builtin,
    };

    let catalog = match &source {
        CatalogSource::Builtin => Ok(Catalog::builtin()),
        CatalogSource::File(path) => Catalog::load(path),
    }
    .and_then(|catalog| catalog.ensure_contains(&settings.home_file).map(|_| catalog));

    match catalog {
        Ok(catalog) => Ok(Startup {
            settings,
            catalog,
            source,
        }),
        Err(error) => Err(StartupError { source, error }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/startup.rs"]
mod tests;
