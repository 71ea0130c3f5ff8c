//! Comprehensive tests for the monitoring profiles.

use crate::error::CatalogError;
use crate::monitoring::{
    AI_ANALYSIS_EVERY_N_CHECKS, BASE_INTERVAL_SECONDS, MonitoringMode, describe, profile, profiles,
};

// ============================================================================
// Profile Values
// ============================================================================

#[test]
fn test_base_interval_is_shared_by_both_modes() {
    for p in profiles() {
        assert_eq!(p.base_interval_seconds, BASE_INTERVAL_SECONDS);
        assert_eq!(p.base_interval_seconds, 30);
    }
}

#[test]
fn test_profiles_lists_basic_then_smart() {
    let [basic, smart] = profiles();
    assert_eq!(basic.mode, MonitoringMode::Basic);
    assert_eq!(smart.mode, MonitoringMode::Smart);
}

#[test]
fn test_smart_mode_analysis_cadence() {
    let smart = profile(MonitoringMode::Smart);
    assert_eq!(smart.ai_analysis_every_n_checks, Some(3));
    assert_eq!(
        smart.effective_ai_interval_seconds(),
        Some(BASE_INTERVAL_SECONDS * AI_ANALYSIS_EVERY_N_CHECKS)
    );
    assert_eq!(smart.effective_ai_interval_seconds(), Some(90));
}

// ============================================================================
// String Boundary
// ============================================================================

#[test]
fn test_describe_accepts_both_modes_case_insensitively() {
    for (input, mode) in [
        ("basic", MonitoringMode::Basic),
        ("Basic", MonitoringMode::Basic),
        ("smart", MonitoringMode::Smart),
        ("SMART", MonitoringMode::Smart),
    ] {
        let profile = describe(input).expect("mode should parse");
        assert_eq!(profile.mode, mode, "input: {input}");
    }
}

#[test]
fn test_describe_rejects_anything_else() {
    for input in ["", "extra", "smartest", "basic "] {
        let err = describe(input).expect_err("mode should be rejected");
        assert!(
            matches!(err, CatalogError::InvalidMode(ref got) if got == input),
            "input: {input}"
        );
    }
}

#[test]
fn test_mode_names_round_trip() {
    for mode in [MonitoringMode::Basic, MonitoringMode::Smart] {
        assert_eq!(MonitoringMode::from_str_loose(mode.as_str()), Some(mode));
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_basic_profile_json_has_no_ai_field() {
    let basic = profile(MonitoringMode::Basic);
    let json = serde_json::to_value(basic).expect("should serialize");
    assert_eq!(json["mode"], "basic");
    assert_eq!(json["base_interval_seconds"], 30);
    assert!(json.get("ai_analysis_every_n_checks").is_none());
}

#[test]
fn test_smart_profile_json_carries_the_cadence() {
    let smart = profile(MonitoringMode::Smart);
    let json = serde_json::to_value(smart).expect("should serialize");
    assert_eq!(json["mode"], "smart");
    assert_eq!(json["ai_analysis_every_n_checks"], 3);
}
