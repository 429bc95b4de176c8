use std::collections::{HashMap, HashSet};

use leon::Template;

use crate::error::Result;

/// Find all keys used by a template.
pub fn get_keys(source: &str) -> Result<HashSet<String>> {
    let template = Template::parse(source)?;

    Ok(template.keys().map(|key| (*key).to_string()).collect())
}

/// Renders a template, every key must be present in the context.
pub fn interpolate(source: &str, context: &HashMap<String, String>) -> Result<String> {
    let template = Template::parse(source)?;

    Ok(template.render(context)?)
}
