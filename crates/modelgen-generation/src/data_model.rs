//! Renderable data models
//!
//! A [`DataModel`] is one generated structure (a class, a record, ...). The
//! target style is picked by its [`ModelKind`], which names the template.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::{GenerationError, Result};
use crate::models::{DataModelField, TemplateBindings};
use crate::renderable::Renderable;
use crate::templates::{TemplateBase, TemplateStats};

/// A code-generation target
///
/// Implementors must override `TEMPLATE_FILE_NAME`; constructing a
/// [`DataModel`] for a kind that leaves it empty fails.
pub trait ModelKind {
    /// Template identifier relative to the template root
    const TEMPLATE_FILE_NAME: &'static str = "";
}

/// One structure to generate, rendered through its kind's template
pub struct DataModel<K: ModelKind> {
    name: String,
    fields: Vec<DataModelField>,
    decorators: Vec<String>,
    base_class: Option<String>,
    template: TemplateBase,
    _kind: PhantomData<K>,
}

impl<K: ModelKind> DataModel<K> {
    /// Create a model using the default configuration
    pub fn new(name: impl Into<String>, fields: Vec<DataModelField>) -> Result<Self> {
        Self::with_config(name, fields, &GenerationConfig::default())
    }

    /// Create a model honouring the given configuration
    ///
    /// # Errors
    /// Returns [`GenerationError::ConfigurationError`] if `K` declares no template.
    pub fn with_config(
        name: impl Into<String>,
        fields: Vec<DataModelField>,
        config: &GenerationConfig,
    ) -> Result<Self> {
        if K::TEMPLATE_FILE_NAME.is_empty() {
            return Err(GenerationError::ConfigurationError(format!(
                "TEMPLATE_FILE_NAME not set for {}",
                std::any::type_name::<K>()
            )));
        }

        let name = name.into();
        let fields = config.empty_fields.apply(fields);
        debug!(
            "Creating {} model {} with {} fields",
            K::TEMPLATE_FILE_NAME,
            name,
            fields.len()
        );

        let template = TemplateBase::new(K::TEMPLATE_FILE_NAME, config.template_root())
            .with_strict_mode(config.strict_mode);

        Ok(Self {
            name,
            fields,
            decorators: Vec::new(),
            base_class: None,
            template,
            _kind: PhantomData,
        })
    }

    /// Set the decorators rendered above the structure
    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Set the parent type
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    /// Name of the generated structure
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in rendering order, after the empty-fields policy
    pub fn fields(&self) -> &[DataModelField] {
        &self.fields
    }

    /// Decorators in rendering order
    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    /// Parent type, if any
    pub fn base_class(&self) -> Option<&str> {
        self.base_class.as_deref()
    }

    /// Template identifier declared by `K`
    pub fn template_file_name(&self) -> &str {
        self.template.template_file_name()
    }

    /// Template usage counters for this instance
    pub fn template_stats(&self) -> TemplateStats {
        self.template.stats()
    }

    fn bindings(&self) -> TemplateBindings<'_> {
        TemplateBindings {
            class_name: &self.name,
            fields: &self.fields,
            decorators: &self.decorators,
            base_class: self.base_class.as_deref(),
        }
    }
}

impl<K: ModelKind> Renderable for DataModel<K> {
    fn render(&self) -> Result<String> {
        self.template.render(&self.bindings())
    }
}

/// Writes `render()` output
///
/// # Panics
/// A render failure becomes [`fmt::Error`], which makes `to_string()` and
/// `format!` panic. Callers that need the error must call [`Renderable::render`].
impl<K: ModelKind> fmt::Display for DataModel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl<K: ModelKind> fmt::Debug for DataModel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataModel")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("decorators", &self.decorators)
            .field("base_class", &self.base_class)
            .field("template", &self.template)
            .finish()
    }
}
