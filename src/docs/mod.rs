//! Configuration Documentation Module
//!
//! This module builds a typed tree from the `docs` section of a configuration
//! file and renders it as Markdown: headings for nested sections, bullets for
//! string descriptions, and raw passthrough for list-valued blocks.

pub mod loader;
pub mod model;
pub mod render;

pub use loader::load_document;
pub use model::{ConfigNode, Document, NodeKind, Section};
pub use render::{render, ROOT_DEPTH};
