//! Result namespacing.
//!
//! Retrieved facts are re-keyed under a fixed prefix so they can land in
//! the orchestrator's flat fact store without colliding with unrelated
//! state. One fact category, `facts`, additionally has its object
//! payload lifted one level.

use indexmap::IndexMap;
use serde_json::Value;

/// Prefix applied to every namespaced fact key.
pub const FACT_KEY_PREFIX: &str = "napalm";

/// The only fact whose object payload is also flattened.
const FLATTENED_FACT: &str = "facts";

/// Re-key retrieved facts as `napalm_<fact>`.
///
/// When the `facts` value is an object, each inner entry is also emitted
/// as a top-level `napalm_<key>`. The lifted entries go in first, so the
/// unconditional `napalm_<fact>` entry wins any key collision.
pub fn namespace_facts(by_fact: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    let mut namespaced = IndexMap::new();
    for (fact, value) in by_fact {
        if fact == FLATTENED_FACT {
            if let Value::Object(entries) = value {
                for (key, inner) in entries {
                    namespaced.insert(prefixed(key), inner.clone());
                }
            }
        }
        namespaced.insert(prefixed(fact), value.clone());
    }
    namespaced
}

fn prefixed(key: &str) -> String {
    format!("{}_{}", FACT_KEY_PREFIX, key)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn make_by_fact(entries: &[(&str, Value)]) -> IndexMap<String, Value> {
        entries
            .iter()
            .map(|(fact, value)| (fact.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_every_fact_gets_the_prefix() {
        let by_fact = make_by_fact(&[
            ("interfaces", json!({"Ethernet1": {}})),
            ("bgp_neighbors", json!({})),
        ]);

        let namespaced = namespace_facts(&by_fact);
        assert_eq!(namespaced["napalm_interfaces"], json!({"Ethernet1": {}}));
        assert_eq!(namespaced["napalm_bgp_neighbors"], json!({}));
        assert_eq!(namespaced.len(), 2);
    }

    #[test]
    fn test_facts_object_is_flattened_one_level() {
        let by_fact = make_by_fact(&[(
            "facts",
            json!({"os_version": "4.28.0", "vendor": "arista"}),
        )]);

        let namespaced = namespace_facts(&by_fact);
        assert_eq!(namespaced["napalm_os_version"], json!("4.28.0"));
        assert_eq!(namespaced["napalm_vendor"], json!("arista"));
        assert_eq!(
            namespaced["napalm_facts"],
            json!({"os_version": "4.28.0", "vendor": "arista"})
        );
    }

    #[test]
    fn test_only_facts_is_flattened() {
        let by_fact = make_by_fact(&[("interfaces", json!({"Ethernet1": {"is_up": true}}))]);

        let namespaced = namespace_facts(&by_fact);
        assert_eq!(namespaced.len(), 1);
        assert!(!namespaced.contains_key("napalm_Ethernet1"));
    }

    #[test]
    fn test_non_object_facts_value_is_not_flattened() {
        let by_fact = make_by_fact(&[("facts", json!("collected"))]);

        let namespaced = namespace_facts(&by_fact);
        assert_eq!(namespaced.len(), 1);
        assert_eq!(namespaced["napalm_facts"], json!("collected"));
    }

    #[test]
    fn test_whole_facts_entry_wins_key_collision() {
        // An inner key literally named "facts" collides with the
        // unconditional napalm_facts entry; the whole object wins.
        let by_fact = make_by_fact(&[("facts", json!({"facts": "inner", "uptime": 1200}))]);

        let namespaced = namespace_facts(&by_fact);
        assert_eq!(
            namespaced["napalm_facts"],
            json!({"facts": "inner", "uptime": 1200})
        );
        assert_eq!(namespaced["napalm_uptime"], json!(1200));
    }
}
