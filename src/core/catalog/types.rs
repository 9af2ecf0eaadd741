//! Command template types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP verbs a command may use
pub const SUPPORTED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern"));

/// One supported downstream call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandTemplate {
    /// Position of the template in the catalog
    pub id: usize,
    pub name: String,
    /// Shown to the classifier; describes when the command applies
    pub description: String,
    /// Target URL; may contain `{placeholder}` tokens
    #[serde(alias = "url")]
    pub url_template: String,
    pub method: String,
    /// Body fields, values usually `{placeholder}` tokens
    #[serde(default, alias = "payload")]
    pub payload_template: BTreeMap<String, String>,
}

impl CommandTemplate {
    /// Placeholder names found in the URL and payload, in order of appearance
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = placeholders(&self.url_template);
        for value in self.payload_template.values() {
            for name in placeholders(value) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Placeholder names in `text`, deduplicated
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for capture in PLACEHOLDER.captures_iter(text) {
        let name = capture[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Whether `method` is one of [`SUPPORTED_METHODS`], ignoring case
pub fn is_supported_method(method: &str) -> bool {
    SUPPORTED_METHODS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(method))
}
