//! Core data models for data-model generation

use serde::{Deserialize, Serialize};

/// Name given to the member substituted into an otherwise empty model
pub const PLACEHOLDER_FIELD_NAME: &str = "pass";

/// Describes one member of a generated structure
///
/// Immutable once built: fields are private and the `with_*` setters consume
/// the value. `required` is a hint for the template and is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModelField {
    name: String,
    type_hint: Option<String>,
    default: Option<String>,
    #[serde(default)]
    required: bool,
}

impl DataModelField {
    /// Create a field with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            default: None,
            required: false,
        }
    }

    /// The member used when a model has no fields of its own
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_FIELD_NAME)
    }

    /// Set the target-language type of the field
    pub fn with_type_hint(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    /// Set the default value expression of the field
    ///
    /// The bundled templates test the default with `{{#if default}}`, so an
    /// empty string renders the same as no default at all.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the field as required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target-language type, if any
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    /// Default value expression, if any
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether the template should treat the field as required
    pub fn required(&self) -> bool {
        self.required
    }
}

/// What a model renders when it is given no fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyFieldsPolicy {
    /// Substitute a single `pass` member so the body stays syntactically valid
    #[default]
    Placeholder,
    /// Keep the field list empty and let the template decide
    EmptyBody,
}

impl EmptyFieldsPolicy {
    /// Apply the policy to a field list
    pub fn apply(self, fields: Vec<DataModelField>) -> Vec<DataModelField> {
        match self {
            EmptyFieldsPolicy::Placeholder if fields.is_empty() => {
                vec![DataModelField::placeholder()]
            }
            _ => fields,
        }
    }
}

/// Values bound into a data-model template
///
/// Every data-model template may reference `class_name`, `fields`,
/// `decorators` and `base_class`, and nothing else.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateBindings<'a> {
    /// Name of the generated structure
    pub class_name: &'a str,
    /// Members in rendering order
    pub fields: &'a [DataModelField],
    /// Decorator names in rendering order
    pub decorators: &'a [String],
    /// Parent type, serialized as `null` when absent
    pub base_class: Option<&'a str>,
}
