use std::collections::HashMap;

/// Maps dish names to bundled images that look better than the raw urls.
#[derive(Debug, Default, Clone)]
pub struct ImageResolver {
    overrides: HashMap<String, String>,
}

impl ImageResolver {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Return the bundled image for `name`, falling back to `raw`.
    pub fn resolve<'a>(&'a self, name: &str, raw: &'a str) -> &'a str {
        self.overrides.get(name).map(String::as_str).unwrap_or(raw)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
