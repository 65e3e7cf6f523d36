//! Shared fixtures for modelgen end-to-end tests

use std::fs;
use std::path::Path;

use modelgen_generation::DataModelField;
use tempfile::TempDir;

/// Fields of the canonical `Person` example
pub fn person_fields() -> Vec<DataModelField> {
    vec![
        DataModelField::new("id")
            .with_type_hint("int")
            .with_required(true),
        DataModelField::new("email")
            .with_type_hint("str")
            .with_default("None"),
    ]
}

/// A temporary template root populated with `(relative name, content)` pairs
pub fn template_root(templates: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in templates {
        write_template(dir.path(), name, content)?;
    }
    Ok(dir)
}

fn write_template(root: &Path, name: &str, content: &str) -> std::io::Result<()> {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
