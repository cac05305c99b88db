//! 数据模型层

mod builtin;
pub mod catalog;

pub use catalog::{Catalog, CatalogError, FileRecord, HOME_FILE};
