//! Headless core: catalog resolution, tab bookkeeping, highlighting.

pub mod effect;
pub mod language;
pub mod resolver;
pub mod services;
pub mod syntax;
pub mod tabs;

pub use effect::Effect;
pub use language::LanguageId;
pub use resolver::{Negotiated, ResolveError, Resolver};
pub use tabs::{TabAction, TabEntry, TabSession, TabState, TabStateError};
