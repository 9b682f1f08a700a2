pub mod docs;
pub mod error;

pub use docs::{load_document, render, ConfigNode, Document, NodeKind, Section, ROOT_DEPTH};
pub use error::{DocgenError, Result};
