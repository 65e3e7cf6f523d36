//! Template handling for data-model generation
//!
//! Provides template root resolution, the lazily compiled template wrapper
//! and the case helpers registered on every compiled template.

pub mod base;
pub mod helpers;
pub mod root;

// Re-export public API
pub use base::{TemplateBase, TemplateStats};
pub use helpers::{register_case_helpers, CaseTransform};
pub use root::TemplateRoot;
