use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Json,
    Yaml,
    Html,
    Css,
    Toml,
    Bash,
    Markdown,
}

impl LanguageId {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str())? {
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "toml" => Some(Self::Toml),
            "sh" | "bash" | "zsh" => Some(Self::Bash),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Map a catalog language tag (`"javascript"`, `"css"`, ...) to a language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Self::JavaScript),
            "typescript" | "ts" => Some(Self::TypeScript),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "toml" => Some(Self::Toml),
            "bash" | "shell" | "sh" => Some(Self::Bash),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Html => "html",
            Self::Css => "css",
            Self::Toml => "toml",
            Self::Bash => "bash",
            Self::Markdown => "markdown",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Toml => "TOML",
            Self::Bash => "Bash",
            Self::Markdown => "Markdown",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
