//! Template storage location

use std::path::{Path, PathBuf};

/// Directory against which template identifiers are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    dir: PathBuf,
}

impl TemplateRoot {
    /// Use a custom directory as the template root
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The `templates/` directory shipped alongside this crate
    ///
    /// The path is fixed at compile time to the crate's source checkout.
    /// A binary moved off the build machine will not find it there and
    /// should point [`GenerationConfig::template_dir`] at a copy instead.
    ///
    /// [`GenerationConfig::template_dir`]: crate::GenerationConfig::template_dir
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a relative template identifier to a file path
    pub fn resolve(&self, template_file_name: &str) -> PathBuf {
        self.dir.join(template_file_name)
    }
}

impl Default for TemplateRoot {
    fn default() -> Self {
        Self::bundled()
    }
}
