#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = DragConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, DragConfig::default());
    assert_eq!(cfg.sticky_bias, DEFAULT_STICKY_BIAS);
    assert!(cfg.fallback_all_zones);
}

#[test]
fn parses_overrides() {
    let cfg = DragConfig::from_lookup(lookup_from(&[
        (ENV_STICKY_BIAS, " 25.5 "),
        (ENV_FALLBACK_ALL_ZONES, "false"),
    ]))
    .unwrap();
    assert_eq!(cfg.sticky_bias, 25.5);
    assert!(!cfg.fallback_all_zones);
}

#[test]
fn zero_bias_is_allowed() {
    let cfg = DragConfig::from_lookup(lookup_from(&[(ENV_STICKY_BIAS, "0")])).unwrap();
    assert_eq!(cfg.sticky_bias, 0.0);
}

#[test]
fn negative_bias_errors() {
    let err = DragConfig::from_lookup(lookup_from(&[(ENV_STICKY_BIAS, "-1")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { key: ENV_STICKY_BIAS, value: "-1".into() });
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn non_finite_bias_errors() {
    assert!(DragConfig::from_lookup(lookup_from(&[(ENV_STICKY_BIAS, "NaN")])).is_err());
    assert!(DragConfig::from_lookup(lookup_from(&[(ENV_STICKY_BIAS, "inf")])).is_err());
    assert!(DragConfig::from_lookup(lookup_from(&[(ENV_STICKY_BIAS, "ten")])).is_err());
}

#[test]
fn bool_accepts_common_spellings() {
    for raw in ["1", "TRUE", "yes", "On"] {
        let cfg = DragConfig::from_lookup(lookup_from(&[(ENV_FALLBACK_ALL_ZONES, raw)])).unwrap();
        assert!(cfg.fallback_all_zones, "{raw}");
    }
    for raw in ["0", "False", "no", "off"] {
        let cfg = DragConfig::from_lookup(lookup_from(&[(ENV_FALLBACK_ALL_ZONES, raw)])).unwrap();
        assert!(!cfg.fallback_all_zones, "{raw}");
    }
}

#[test]
fn bad_bool_names_the_key() {
    let err = DragConfig::from_lookup(lookup_from(&[(ENV_FALLBACK_ALL_ZONES, "maybe")])).unwrap_err();
    assert!(err.to_string().contains(ENV_FALLBACK_ALL_ZONES));
}
