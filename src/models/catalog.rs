//! 文件目录：启动时固定、运行期只读
//!
//! The catalog is an ordered name -> record mapping. Insertion order drives the sidebar
//! listing and the embedded JSON object; lookups go through a hash index.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;
use std::{fmt, io};

use super::builtin::BUILTIN_FILES;
use crate::kernel::language::LanguageId;

pub const HOME_FILE: &str = "index.html";

const FALLBACK_TYPE_TAG: &str = "txt";
const FALLBACK_LANGUAGE: &str = "plaintext";

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidName(String),
    DuplicateName(String),
    MissingHome(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "failed to parse catalog: {}", err),
            CatalogError::InvalidName(name) => write!(f, "invalid file name in catalog: {:?}", name),
            CatalogError::DuplicateName(name) => {
                write!(f, "duplicate file name in catalog: {}", name)
            }
            CatalogError::MissingHome(name) => {
                write!(f, "catalog does not contain the home file {}", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    #[serde(skip)]
    name: CompactString,
    content: String,
    language: CompactString,
    #[serde(rename = "type")]
    type_tag: CompactString,
}

impl FileRecord {
    pub fn new(
        name: impl Into<CompactString>,
        content: impl Into<String>,
        language: impl Into<CompactString>,
        type_tag: impl Into<CompactString>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            language: language.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Build a record, deriving missing tags from the file extension.
    pub fn with_defaults(
        name: impl Into<CompactString>,
        content: impl Into<String>,
        language: Option<&str>,
        type_tag: Option<&str>,
    ) -> Self {
        let name = name.into();
        let language = match language {
            Some(language) => CompactString::from(language),
            None => LanguageId::from_path(Path::new(name.as_str()))
                .map(|id| CompactString::from(id.tag()))
                .unwrap_or_else(|| CompactString::from(FALLBACK_LANGUAGE)),
        };
        let type_tag = match type_tag {
            Some(tag) => CompactString::from(tag),
            None => type_tag_from_name(&name),
        };
        Self {
            name,
            content: content.into(),
            language,
            type_tag,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn language_id(&self) -> Option<LanguageId> {
        LanguageId::from_tag(&self.language).or_else(|| LanguageId::from_path(Path::new(self.name())))
    }
}

fn type_tag_from_name(name: &str) -> CompactString {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| CompactString::from(ext.to_ascii_lowercase()))
        .unwrap_or_else(|| CompactString::from(FALLBACK_TYPE_TAG))
}

/// Names double as URL paths and query values, so they stay within a conservative set.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('/')
        && !name.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..")
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-' | b'/' | b'~' | b'@'))
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    content: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default, rename = "type")]
    type_tag: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FileRecord>,
    index: FxHashMap<CompactString, usize>,
}

impl Catalog {
    pub fn new(records: impl IntoIterator<Item = FileRecord>) -> Result<Self> {
        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// The demo catalog shipped with the binary.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for file in BUILTIN_FILES {
            let record = FileRecord::new(file.name, file.content, file.language, file.type_tag);
            let inserted = catalog.insert(record);
            debug_assert!(inserted.is_ok(), "builtin catalog names are unique");
        }
        catalog
    }

    /// Parse a JSON array of `{ "name", "content", "language"?, "type"? }` objects.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(data)?;
        Self::new(entries.into_iter().map(|entry| {
            FileRecord::with_defaults(
                entry.name,
                entry.content,
                entry.language.as_deref(),
                entry.type_tag.as_deref(),
            )
        }))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        tracing::info!(path = %path.display(), files = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn insert(&mut self, record: FileRecord) -> Result<()> {
        if !is_valid_name(record.name()) {
            return Err(CatalogError::InvalidName(record.name().to_string()));
        }
        if self.index.contains_key(record.name()) {
            return Err(CatalogError::DuplicateName(record.name().to_string()));
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.index.get(name).and_then(|&i| self.records.get(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn ensure_contains(&self, home: &str) -> Result<()> {
        if self.contains(home) {
            Ok(())
        } else {
            Err(CatalogError::MissingHome(home.to_string()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(record.name(), record)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/catalog.rs"]
mod tests;
