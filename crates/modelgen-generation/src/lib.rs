#![warn(missing_docs)]

//! Data-model code generation for modelgen
//!
//! Turns a logical description of a structure (a name, ordered fields,
//! decorators and an optional base type) into source text by rendering a
//! named template. Templates are compiled lazily, once per model instance,
//! and reused for every later render.
//!
//! ```no_run
//! use modelgen_generation::{BaseModel, DataModelField, Renderable};
//!
//! let model = BaseModel::new(
//!     "Person",
//!     vec![
//!         DataModelField::new("id").with_type_hint("int").with_required(true),
//!         DataModelField::new("email").with_type_hint("str").with_default("None"),
//!     ],
//! )?;
//! println!("{}", model.render()?);
//! # Ok::<(), modelgen_generation::GenerationError>(())
//! ```

pub mod config;
pub mod data_model;
pub mod error;
pub mod kinds;
pub mod models;
pub mod renderable;
pub mod templates;

// Re-export public API
pub use config::{ConfigLoader, GenerationConfig};
pub use data_model::{DataModel, ModelKind};
pub use error::{GenerationError, Result};
pub use kinds::{BaseModel, DataClass, DataClassModel, PydanticBaseModel};
pub use models::{DataModelField, EmptyFieldsPolicy, TemplateBindings, PLACEHOLDER_FIELD_NAME};
pub use renderable::Renderable;
pub use templates::{CaseTransform, TemplateBase, TemplateRoot, TemplateStats};
