//! Case transformation helpers available to every template
//!
//! Registered on each compiled registry, so templates can write
//! `{{snake_case name}}` or `{{pascal_case class_name}}`.

use handlebars::Handlebars;
use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};

/// Represents a case transformation for rendered identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// PascalCase (e.g., MyModel)
    PascalCase,
    /// camelCase (e.g., myModel)
    CamelCase,
    /// snake_case (e.g., my_model)
    SnakeCase,
    /// kebab-case (e.g., my-model)
    KebabCase,
    /// UPPERCASE (e.g., MY_MODEL)
    UpperCase,
    /// lowercase (e.g., my_model)
    LowerCase,
}

impl CaseTransform {
    /// All transforms, in registration order
    pub const ALL: [CaseTransform; 6] = [
        CaseTransform::PascalCase,
        CaseTransform::CamelCase,
        CaseTransform::SnakeCase,
        CaseTransform::KebabCase,
        CaseTransform::UpperCase,
        CaseTransform::LowerCase,
    ];

    /// Apply case transformation to a string
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::PascalCase => input.to_pascal_case(),
            CaseTransform::CamelCase => input.to_lower_camel_case(),
            CaseTransform::SnakeCase => input.to_snake_case(),
            CaseTransform::KebabCase => input.to_kebab_case(),
            CaseTransform::UpperCase => input.to_uppercase(),
            CaseTransform::LowerCase => input.to_lowercase(),
        }
    }

    /// Name of the template helper bound to this transform
    pub fn helper_name(&self) -> &'static str {
        match self {
            CaseTransform::PascalCase => "pascal_case",
            CaseTransform::CamelCase => "camel_case",
            CaseTransform::SnakeCase => "snake_case",
            CaseTransform::KebabCase => "kebab_case",
            CaseTransform::UpperCase => "upper_case",
            CaseTransform::LowerCase => "lower_case",
        }
    }
}

mod case_helpers {
    use super::CaseTransform;
    use handlebars::handlebars_helper;

    handlebars_helper!(pascal_case: |s: str| CaseTransform::PascalCase.apply(s));
    handlebars_helper!(camel_case: |s: str| CaseTransform::CamelCase.apply(s));
    handlebars_helper!(snake_case: |s: str| CaseTransform::SnakeCase.apply(s));
    handlebars_helper!(kebab_case: |s: str| CaseTransform::KebabCase.apply(s));
    handlebars_helper!(upper_case: |s: str| CaseTransform::UpperCase.apply(s));
    handlebars_helper!(lower_case: |s: str| CaseTransform::LowerCase.apply(s));
}

/// Register every case helper on a registry
pub fn register_case_helpers(registry: &mut Handlebars<'_>) {
    use case_helpers::*;

    for transform in CaseTransform::ALL {
        let name = transform.helper_name();
        match transform {
            CaseTransform::PascalCase => registry.register_helper(name, Box::new(pascal_case)),
            CaseTransform::CamelCase => registry.register_helper(name, Box::new(camel_case)),
            CaseTransform::SnakeCase => registry.register_helper(name, Box::new(snake_case)),
            CaseTransform::KebabCase => registry.register_helper(name, Box::new(kebab_case)),
            CaseTransform::UpperCase => registry.register_helper(name, Box::new(upper_case)),
            CaseTransform::LowerCase => registry.register_helper(name, Box::new(lower_case)),
        }
    }
}
