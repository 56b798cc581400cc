//! Instance list rules and dialog input normalization.

use std::collections::HashSet;

use stoat_common::ConfigError;
use url::Url;

use crate::schema::DesktopConfig;

use super::helpers::push_if_blank;

fn check_instance_fields(errors: &mut Vec<String>, index: usize, id: &str, label: &str) {
    push_if_blank(errors, &format!("instances[{index}].id"), id);
    push_if_blank(errors, &format!("instances[{index}].label"), label);
}

pub(super) fn validate_instances(errors: &mut Vec<String>, config: &DesktopConfig) {
    if config.instances.is_empty() {
        errors.push("instances must contain at least one entry".into());
        return;
    }

    let mut seen = HashSet::new();
    for (index, instance) in config.instances.iter().enumerate() {
        check_instance_fields(errors, index, &instance.id, &instance.label);
        if !seen.insert(instance.id.as_str()) {
            errors.push(format!("duplicate instance id '{}'", instance.id));
        }
    }
}

/// Normalize a label/URL pair typed into the instance manager.
///
/// Both are trimmed, a URL without an `http://` or `https://` prefix gets
/// `https://` prepended, and the result must parse as an absolute http(s)
/// URL with a host.
pub fn normalize_instance_input(label: &str, url: &str) -> Result<(String, String), ConfigError> {
    let label = label.trim();
    let url = url.trim();

    if label.is_empty() {
        return Err(ConfigError::ValidationError("label must not be empty".into()));
    }
    if url.is_empty() {
        return Err(ConfigError::ValidationError("url must not be empty".into()));
    }

    let url = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parsed = Url::parse(&url)
        .map_err(|e| ConfigError::ValidationError(format!("invalid url '{url}': {e}")))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => {
            return Err(ConfigError::ValidationError(format!(
                "invalid url '{url}': missing host"
            )))
        }
    }

    Ok((label.to_string(), url))
}
