//! Sensitive-value collection for output redaction.
//!
//! Scans resolved parameters and the provider overlay for secret-bearing
//! keys and returns the literal values found. Callers register the set
//! with their logging layer so the values never reach logged or echoed
//! output; nothing here suppresses output by itself.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use secrecy::ExposeSecret;
use serde_json::Value;

use super::{ConnectionParams, ProviderOverlay};

/// Keys whose values must be kept out of logged output.
pub const NO_LOG_KEYS: [&str; 2] = ["password", "secret"];

/// Collect every sensitive value from the resolved parameters and, when
/// one was supplied, the provider overlay.
///
/// Scanned locations: the resolved password, `password`/`secret` entries
/// in the resolved optional args, the overlay's own password and secret,
/// and `password`/`secret` entries in the overlay's optional args. The
/// overlay is scanned even when explicit fields overrode it, since its
/// values are still secrets. String leaves of nested structures are
/// collected recursively; empty values are skipped.
pub fn no_log_values(
    resolved: &ConnectionParams,
    overlay: Option<&ProviderOverlay>,
) -> BTreeSet<String> {
    let mut values = BTreeSet::new();

    push(&mut values, resolved.password.expose_secret());
    collect_from_args(&mut values, &resolved.optional_args);

    if let Some(overlay) = overlay {
        if let Some(password) = &overlay.password {
            push(&mut values, password.expose_secret());
        }
        if let Some(secret) = &overlay.secret {
            push(&mut values, secret.expose_secret());
        }
        if let Some(args) = &overlay.optional_args {
            collect_from_args(&mut values, args);
        }
    }

    values
}

fn collect_from_args(values: &mut BTreeSet<String>, args: &IndexMap<String, Value>) {
    for key in NO_LOG_KEYS {
        if let Some(value) = args.get(key) {
            collect_value(values, value);
        }
    }
}

/// Walk a value, collecting string leaves and stringified numbers.
fn collect_value(values: &mut BTreeSet<String>, value: &Value) {
    match value {
        Value::String(s) => push(values, s),
        Value::Number(n) => push(values, &n.to_string()),
        Value::Array(items) => {
            for item in items {
                collect_value(values, item);
            }
        }
        Value::Object(entries) => {
            for entry in entries.values() {
                collect_value(values, entry);
            }
        }
        Value::Bool(_) | Value::Null => {}
    }
}

fn push(values: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() {
        values.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;

    fn make_params(optional_args: IndexMap<String, Value>) -> ConnectionParams {
        ConnectionParams {
            hostname: "192.0.2.1".to_string(),
            username: "admin".to_string(),
            password: SecretString::from("pa55".to_string()),
            device_kind: "eos".to_string(),
            timeout: 60,
            optional_args,
        }
    }

    #[test]
    fn test_collects_resolved_password() {
        let values = no_log_values(&make_params(IndexMap::new()), None);
        assert!(values.contains("pa55"));
    }

    #[test]
    fn test_collects_secret_from_optional_args() {
        let mut args = IndexMap::new();
        args.insert("secret".to_string(), json!("s3cr3t"));
        let values = no_log_values(&make_params(args), None);
        assert!(values.contains("s3cr3t"));
    }

    #[test]
    fn test_collects_overlay_values_even_when_overridden() {
        let mut overlay_args = IndexMap::new();
        overlay_args.insert("secret".to_string(), json!("enable-pw"));
        let overlay = ProviderOverlay {
            password: Some(SecretString::from("overlay-pw".to_string())),
            secret: Some(SecretString::from("overlay-secret".to_string())),
            optional_args: Some(overlay_args),
            ..ProviderOverlay::default()
        };

        // Resolved password came from the explicit tier; the overlay's
        // values still count as secrets.
        let values = no_log_values(&make_params(IndexMap::new()), Some(&overlay));
        assert!(values.contains("pa55"));
        assert!(values.contains("overlay-pw"));
        assert!(values.contains("overlay-secret"));
        assert!(values.contains("enable-pw"));
    }

    #[test]
    fn test_collects_nested_structure_leaves() {
        let mut args = IndexMap::new();
        args.insert(
            "secret".to_string(),
            json!({"enable": "level15", "backup": ["older", 9001]}),
        );
        let values = no_log_values(&make_params(args), None);
        assert!(values.contains("level15"));
        assert!(values.contains("older"));
        assert!(values.contains("9001"));
    }

    #[test]
    fn test_skips_empty_and_non_sensitive_values() {
        let mut args = IndexMap::new();
        args.insert("secret".to_string(), json!(""));
        args.insert("port".to_string(), json!(8443));
        let values = no_log_values(&make_params(args), None);
        assert!(!values.contains(""));
        assert!(!values.contains("8443"));
    }
}
