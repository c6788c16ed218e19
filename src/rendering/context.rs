use crate::{prelude::HashMap, Result};
use serde::Serialize;

/// Accumulates the map script while layers render into it
///
/// Variable names are handed out from per-prefix counters that start at
/// zero for every context, so rendering the same map twice produces the
/// same script byte for byte.
pub struct RenderContext {
    counters: HashMap<String, usize>,
    map_var: String,
    script: String,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            counters: HashMap::default(),
            map_var: String::new(),
            script: String::new(),
        }
    }

    /// Returns the next free variable name for `prefix`, e.g. `marker_0`
    pub fn next_name(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        let name = format!("{}_{}", prefix, counter);
        *counter += 1;
        name
    }

    /// Variable holding the Leaflet map the layers attach to
    pub fn map_var(&self) -> &str {
        &self.map_var
    }

    pub fn set_map_var(&mut self, map_var: String) {
        self.map_var = map_var;
    }

    /// Appends one statement to the script
    pub fn push_line(&mut self, line: impl AsRef<str>) {
        self.script.push_str("    ");
        self.script.push_str(line.as_ref());
        self.script.push('\n');
    }

    pub fn push_blank(&mut self) {
        self.script.push('\n');
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn into_script(self) -> String {
        self.script
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a value as a JavaScript literal that is safe inside `<script>`
///
/// `</` and `<!--` can only occur inside string literals, where `\/` and
/// `\!` read back as the plain characters.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\!--"))
}
