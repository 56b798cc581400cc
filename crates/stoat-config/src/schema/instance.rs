//! Instance records.

use serde::{Deserialize, Serialize};

/// Id of the instance shipped in a fresh config.
pub const DEFAULT_INSTANCE_ID: &str = "default";

/// One remote endpoint the shell can embed.
///
/// Identity is `id`; `label` and `url` may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub label: String,
    pub url: String,
}

impl Instance {
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The instance list of a fresh config.
pub fn default_instances() -> Vec<Instance> {
    vec![Instance::new(
        DEFAULT_INSTANCE_ID,
        "Revolt",
        "https://beta.revolt.chat",
    )]
}
