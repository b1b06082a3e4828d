//! Template environment setup

use std::collections::HashMap;
use std::path::Path;

use heck::ToKebabCase;
use tera::{Tera, Value};

use crate::Result;

/// Load all `.rst` templates from the template directory into a Tera
/// instance and register the custom filters.
///
/// Templates are registered by file name (e.g. `chapter.rst`).
pub fn load_templates(template_dir: &Path) -> Result<Tera> {
    let glob = template_dir.join("*.rst").to_string_lossy().to_string();
    let mut tera = Tera::new(&glob)?;
    tera.register_filter("normalize_id", normalize_id);
    Ok(tera)
}

/// Slugify a value into a kebab-case page id
fn normalize_id(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("normalize_id filter expects a string"))?;
    Ok(Value::String(s.to_kebab_case()))
}

/// Kebab-case slug used for output file names
pub fn slug(raw: &str) -> String {
    raw.to_kebab_case()
}
