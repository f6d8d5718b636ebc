//! End-to-end load-phase scenario: directives in, gate and plan out,
//! output directory provisioned on disk.

use routeprof::config::{load, ScopeDirective};
use routeprof::domain::{ConfigError, IntervalMs};
use routeprof::gate::Decision;

fn directives_json(directory: &std::path::Path) -> String {
    format!(
        r#"[
            {{ "scope": "/", "enabled": false }},
            {{ "scope": "/admin", "enabled": true, "interval_ms": 30000, "directory": {dir:?} }}
        ]"#,
        dir = directory
    )
}

#[test]
fn test_load_provisions_and_gates() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let prof_dir = tmp.path().join("prof");

    let directives: Vec<ScopeDirective> =
        serde_json::from_str(&directives_json(&prof_dir)).expect("valid JSON");
    let loaded = load(directives).expect("load should succeed");

    // Provisioning created the missing directory during load
    assert!(prof_dir.is_dir());

    // Route inheriting the disabled root passes through; the enabled
    // scope and anything under it instruments
    assert_eq!(loaded.gate.decide("/dashboard"), Decision::PassThrough);
    assert_eq!(loaded.gate.decide("/admin"), Decision::Instrument);
    assert_eq!(loaded.gate.decide("/admin/users"), Decision::Instrument);

    let plan = loaded.sampling.expect("one scope enabled sampling");
    assert_eq!(plan.interval, IntervalMs(30_000));
    assert_eq!(plan.scope.as_str(), "/admin");
    assert_eq!(plan.directory.as_deref(), Some(prof_dir.as_path()));
}

#[test]
fn test_reload_is_idempotent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let prof_dir = tmp.path().join("prof");

    for _ in 0..2 {
        let directives: Vec<ScopeDirective> =
            serde_json::from_str(&directives_json(&prof_dir)).expect("valid JSON");
        load(directives).expect("reload over an existing directory succeeds");
    }
    assert!(prof_dir.is_dir());
}

#[test]
fn test_load_fails_when_path_is_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let prof_dir = tmp.path().join("prof");
    std::fs::write(&prof_dir, b"occupied").expect("write file");

    let directives: Vec<ScopeDirective> =
        serde_json::from_str(&directives_json(&prof_dir)).expect("valid JSON");
    let err = load(directives).expect_err("plain file at the output path is fatal");
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_load_fails_on_conflicting_intervals() {
    let json = r#"[
        { "scope": "/a", "enabled": true, "interval_ms": 30000 },
        { "scope": "/b", "enabled": true, "interval_ms": 5000 }
    ]"#;
    let directives: Vec<ScopeDirective> = serde_json::from_str(json).expect("valid JSON");
    let err = load(directives).expect_err("two enabled scopes, two intervals");
    assert!(matches!(err, ConfigError::ConflictingIntervals { .. }));
}

#[test]
fn test_omitted_fields_deserialize_as_unset() {
    let json = r#"[ { "scope": "/api" } ]"#;
    let directives: Vec<ScopeDirective> = serde_json::from_str(json).expect("valid JSON");
    let loaded = load(directives).expect("bare scope loads");

    let node = loaded.gate.resolved("/api").expect("declared scope is resolved");
    assert!(!node.enabled);
    assert_eq!(node.interval, IntervalMs(60_000));
    assert!(loaded.sampling.is_none());
}
