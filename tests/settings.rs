use std::collections::HashMap;

use inductor::settings::{CAPACITANCE_UNIT_KEY, DISPLAY_UNIT_KEY, PARASITIC_UNIT_KEY, TIME_UNIT_KEY};
use inductor::{CapacitanceUnit, InductanceUnit, InductorError, Settings, TimeUnit, UnitSystem};
use rstest::rstest;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_keys_keep_calculator_defaults() {
    let settings = Settings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(settings.units, UnitSystem::new());
    assert_eq!(settings.preferred_display, None);
}

#[test]
fn every_key_is_read() {
    let settings = Settings::from_lookup(lookup(&[
        (CAPACITANCE_UNIT_KEY, "pF"),
        (PARASITIC_UNIT_KEY, "nH"),
        (TIME_UNIT_KEY, "ns"),
        (DISPLAY_UNIT_KEY, "uH"),
    ]))
    .unwrap();
    assert_eq!(settings.units.capacitance, CapacitanceUnit::Picofarad);
    assert_eq!(settings.units.parasitic, InductanceUnit::Nanohenry);
    assert_eq!(settings.units.time, TimeUnit::Nanosecond);
    assert_eq!(settings.preferred_display, Some(InductanceUnit::Microhenry));
}

#[rstest]
#[case("mH", InductanceUnit::Millihenry)]
#[case("H", InductanceUnit::Henry)]
fn large_parasitic_unit_is_accepted(#[case] raw: &str, #[case] expected: InductanceUnit) {
    // Unusual for a fixture, so only warned about.
    let settings = Settings::from_lookup(lookup(&[(PARASITIC_UNIT_KEY, raw)])).unwrap();
    assert_eq!(settings.units.parasitic, expected);
    assert_eq!(settings.units, UnitSystem::new().parasitic(expected));
}

#[test]
fn display_key_only_sets_preferred_display() {
    let settings = Settings::from_lookup(lookup(&[(DISPLAY_UNIT_KEY, "mH")])).unwrap();
    assert_eq!(settings.preferred_display, Some(InductanceUnit::Millihenry));
    assert_eq!(settings.units, UnitSystem::new());
}

#[test]
fn blank_value_is_ignored() {
    let settings = Settings::from_lookup(lookup(&[(TIME_UNIT_KEY, "  ")])).unwrap();
    assert_eq!(settings.units.time, TimeUnit::Microsecond);
}

#[test]
fn unknown_unit_is_an_invalid_setting() {
    let err = Settings::from_lookup(lookup(&[(CAPACITANCE_UNIT_KEY, "mF")])).unwrap_err();
    match err {
        InductorError::InvalidSetting { key, value, .. } => {
            assert_eq!(key, CAPACITANCE_UNIT_KEY);
            assert_eq!(value, "mF");
        }
        other => panic!("expected InvalidSetting, got {other:?}"),
    }
}

#[test]
fn from_env_reads_the_process_environment() {
    // After `.env` is loaded, both paths see the same variables.
    let from_env = Settings::from_env().unwrap();
    let direct = Settings::from_lookup(|key| std::env::var(key).ok()).unwrap();
    assert_eq!(from_env, direct);
}
