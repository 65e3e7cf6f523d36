//! Lazily compiled template wrapper
//!
//! A [`TemplateBase`] knows which template file it renders but does not touch
//! the filesystem until the first render. The compiled registry is then kept
//! for the lifetime of the instance and reused by every later render.

use std::cell::Cell;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use handlebars::Handlebars;
use once_cell::unsync::OnceCell;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{GenerationError, Result};
use crate::templates::helpers::register_case_helpers;
use crate::templates::root::TemplateRoot;

/// Counters describing how an instance used its template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateStats {
    /// Successful compilations (never more than one)
    pub compilations: usize,
    /// Successful renders
    pub renders: usize,
}

/// A named template that is compiled on first use and cached afterwards
pub struct TemplateBase {
    template_file_name: String,
    root: TemplateRoot,
    strict_mode: bool,
    compiled: OnceCell<Handlebars<'static>>,
    compilations: Cell<usize>,
    renders: Cell<usize>,
}

impl TemplateBase {
    /// Create a wrapper for `template_file_name` under `root`
    ///
    /// Nothing is read or compiled here.
    pub fn new(template_file_name: impl Into<String>, root: TemplateRoot) -> Self {
        Self {
            template_file_name: template_file_name.into(),
            root,
            strict_mode: false,
            compiled: OnceCell::new(),
            compilations: Cell::new(0),
            renders: Cell::new(0),
        }
    }

    /// Fail on variables the bindings do not provide instead of rendering them empty
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Template identifier relative to the root
    pub fn template_file_name(&self) -> &str {
        &self.template_file_name
    }

    /// Resolved location of the template source
    pub fn path(&self) -> PathBuf {
        self.root.resolve(&self.template_file_name)
    }

    /// Whether the template has already been compiled
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Usage counters for this instance
    pub fn stats(&self) -> TemplateStats {
        TemplateStats {
            compilations: self.compilations.get(),
            renders: self.renders.get(),
        }
    }

    /// The compiled template, compiling it on first access
    ///
    /// A failed compilation leaves the cache empty.
    pub fn compiled(&self) -> Result<&Handlebars<'static>> {
        self.compiled.get_or_try_init(|| self.compile())
    }

    /// Render the template with the given bindings
    ///
    /// # Errors
    /// Returns [`GenerationError::TemplateResolutionError`] if the template cannot
    /// be read or compiled, and [`GenerationError::RenderError`] if substitution fails.
    pub fn render<T: Serialize>(&self, bindings: &T) -> Result<String> {
        let registry = self.compiled()?;

        let rendered = registry
            .render(&self.template_file_name, bindings)
            .map_err(|e| {
                GenerationError::RenderError(format!("{}: {}", self.template_file_name, e))
            })?;

        self.renders.set(self.renders.get() + 1);
        trace!(
            template = %self.template_file_name,
            bytes = rendered.len(),
            "Rendered template"
        );

        Ok(rendered)
    }

    fn compile(&self) -> Result<Handlebars<'static>> {
        let path = self.path();
        debug!("Compiling template {} from {}", self.template_file_name, path.display());

        let source =
            fs::read_to_string(&path).map_err(|e| GenerationError::TemplateResolutionError {
                template: self.template_file_name.clone(),
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;

        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(self.strict_mode);
        register_case_helpers(&mut registry);
        registry
            .register_template_string(&self.template_file_name, source)
            .map_err(|e| GenerationError::TemplateResolutionError {
                template: self.template_file_name.clone(),
                reason: e.to_string(),
            })?;

        self.compilations.set(self.compilations.get() + 1);
        Ok(registry)
    }
}

impl fmt::Debug for TemplateBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateBase")
            .field("template_file_name", &self.template_file_name)
            .field("root", &self.root)
            .field("strict_mode", &self.strict_mode)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn root_with(name: &str, content: &str) -> (TempDir, TemplateRoot) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        let root = TemplateRoot::new(temp_dir.path());
        (temp_dir, root)
    }

    #[test]
    fn test_new_does_not_compile() {
        let (_dir, root) = root_with("t.hbs", "Hello {{name}}");
        let template = TemplateBase::new("t.hbs", root);
        assert!(!template.is_compiled());
        assert_eq!(template.stats(), TemplateStats::default());
    }

    #[test]
    fn test_render_substitutes_bindings() {
        let (_dir, root) = root_with("t.hbs", "Hello {{name}}");
        let template = TemplateBase::new("t.hbs", root);
        let rendered = template.render(&json!({ "name": "World" })).unwrap();
        assert_eq!(rendered, "Hello World");
        assert!(template.is_compiled());
    }

    #[test]
    fn test_compiles_once_across_renders() {
        let (_dir, root) = root_with("t.hbs", "{{a}}-{{b}}");
        let template = TemplateBase::new("t.hbs", root);
        template.render(&json!({ "a": 1, "b": 2 })).unwrap();
        template.render(&json!({ "a": 3, "b": 4 })).unwrap();
        template.render(&json!({ "a": 5, "b": 6 })).unwrap();

        let stats = template.stats();
        assert_eq!(stats.compilations, 1);
        assert_eq!(stats.renders, 3);
    }

    #[test]
    fn test_cached_template_survives_source_removal() {
        let (dir, root) = root_with("t.hbs", "cached {{x}}");
        let template = TemplateBase::new("t.hbs", root);
        assert_eq!(template.render(&json!({ "x": 1 })).unwrap(), "cached 1");

        fs::remove_file(dir.path().join("t.hbs")).unwrap();
        assert_eq!(template.render(&json!({ "x": 2 })).unwrap(), "cached 2");
    }

    #[test]
    fn test_missing_template_is_resolution_error() {
        let temp_dir = TempDir::new().unwrap();
        let template = TemplateBase::new("missing.hbs", TemplateRoot::new(temp_dir.path()));
        let err = template.render(&json!({})).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::TemplateResolutionError { ref template, .. }
                if template == "missing.hbs"
        ));
        assert!(!template.is_compiled());
        assert_eq!(template.stats().renders, 0);
    }

    #[test]
    fn test_invalid_syntax_is_resolution_error() {
        let (_dir, root) = root_with("bad.hbs", "{{#each fields}}never closed");
        let template = TemplateBase::new("bad.hbs", root);
        let err = template.render(&json!({ "fields": [] })).unwrap_err();
        assert!(matches!(err, GenerationError::TemplateResolutionError { .. }));
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let (_dir, root) = root_with("t.hbs", "x: {{ty}} = {{default}}");
        let template = TemplateBase::new("t.hbs", root);
        let rendered = template
            .render(&json!({ "ty": "Dict[str, List[int]]", "default": "\"<none>\"" }))
            .unwrap();
        assert_eq!(rendered, "x: Dict[str, List[int]] = \"<none>\"");
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variable() {
        let (_dir, root) = root_with("t.hbs", "{{unknown}}");
        let lenient = TemplateBase::new("t.hbs", root.clone());
        assert_eq!(lenient.render(&json!({})).unwrap(), "");

        let strict = TemplateBase::new("t.hbs", root).with_strict_mode(true);
        let err = strict.render(&json!({})).unwrap_err();
        assert!(matches!(err, GenerationError::RenderError(_)));
        assert_eq!(strict.stats().compilations, 1);
    }

    #[test]
    fn test_case_helpers_available() {
        let (_dir, root) = root_with("t.hbs", "{{snake_case name}}");
        let template = TemplateBase::new("t.hbs", root);
        assert_eq!(template.render(&json!({ "name": "OrderLine" })).unwrap(), "order_line");
    }
}
