//! Registry rules: `.claude-plugin/marketplace.json` parses and every skill path it lists exists.
//!
//! Plugin entries are read one at a time from raw JSON, so a badly typed field in one plugin
//! is reported against that plugin and the paths of its siblings are still checked.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::config::RepoLayout;
use crate::report::ValidationReport;

/// Label used for plugins without a `name`.
pub const UNNAMED_PLUGIN: &str = "(unnamed)";

/// Root of marketplace.json. Fields other than `plugins` are not inspected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registry {
    /// Missing or `null` means no plugins.
    #[serde(default)]
    pub plugins: Option<Vec<Value>>,
}

/// One plugin group and the skill directories it ships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginEntry {
    pub name: Option<String>,
    /// Paths relative to the repository root, conventionally `./skills/<name>`.
    pub skills: Vec<String>,
}

impl PluginEntry {
    /// Read one entry of `plugins`. Badly typed parts are reported against the plugin and
    /// left out; whatever is usable is returned.
    pub fn from_json(value: &Value, report: &mut ValidationReport) -> Option<Self> {
        let Some(obj) = value.as_object() else {
            report.error(format!(
                "[marketplace:{}] plugin entry must be a JSON object (got {})",
                UNNAMED_PLUGIN, value
            ));
            return None;
        };

        // Non-string names are shown as written.
        let name = match obj.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        let mut entry = PluginEntry {
            name,
            skills: Vec::new(),
        };

        match obj.get("skills") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    match item.as_str() {
                        Some(path) => entry.skills.push(path.to_string()),
                        None => report.error(format!(
                            "[marketplace:{}] skill path {} is not a string",
                            entry.display_name(),
                            item
                        )),
                    }
                }
            }
            Some(other) => report.error(format!(
                "[marketplace:{}] 'skills' must be an array of paths (got {})",
                entry.display_name(),
                other
            )),
        }
        Some(entry)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_PLUGIN)
    }
}

/// Read and parse the registry, reporting why it could not be used.
fn load_registry(path: &Path, report: &mut ValidationReport) -> Option<Vec<Value>> {
    if !path.exists() {
        report.error(format!("marketplace.json not found at {}", path.display()));
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            report.error(format!("cannot read marketplace.json at {}: {}", path.display(), e));
            return None;
        }
    };
    let value: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            report.error(format!("marketplace.json is not valid JSON: {}", e));
            return None;
        }
    };
    // Derived struct impls also accept sequences, so the object check comes first.
    if !value.is_object() {
        report.error(format!(
            "marketplace.json must contain a JSON object at the top level (got {})",
            json_kind(&value)
        ));
        return None;
    }
    match serde_json::from_value::<Registry>(value) {
        Ok(r) => Some(r.plugins.unwrap_or_default()),
        Err(e) => {
            report.error(format!("marketplace.json does not match the registry format: {}", e));
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// True when `skill_path`, taken relative to `root` with `.`/`..` and symlinks resolved, is an
/// existing directory.
pub fn resolves_to_dir(root: &Path, skill_path: &str) -> bool {
    match std::fs::canonicalize(root.join(skill_path)) {
        Ok(resolved) => resolved.is_dir(),
        Err(_) => false,
    }
}

/// Run the registry rules.
pub fn check_registry(layout: &RepoLayout, report: &mut ValidationReport) {
    let Some(plugins) = load_registry(&layout.registry_path, report) else {
        return;
    };

    for value in &plugins {
        let Some(plugin) = PluginEntry::from_json(value, report) else {
            continue;
        };
        let plugin_name = plugin.display_name();
        for skill_path in &plugin.skills {
            report.count_registry_ref();
            if resolves_to_dir(&layout.root, skill_path) {
                log::debug!("[marketplace:{}] {} ok", plugin_name, skill_path);
            } else {
                report.error(format!(
                    "[marketplace:{}] skill path '{}' does not exist on disk",
                    plugin_name, skill_path
                ));
            }
        }
    }
}
