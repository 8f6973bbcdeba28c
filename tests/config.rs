use scopefit::persistence::{load_config, load_config_or_default, save_config};
use scopefit::{BenchConfig, Normalization, ScopeError};

#[test]
fn yaml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.yaml");

    let mut cfg = BenchConfig::default();
    cfg.first_run = 10;
    cfg.last_run = 12;
    cfg.load_ohms = 4.7;
    cfg.normalization = Normalization::Rms;
    save_config(&path, &cfg).unwrap();

    let restored = load_config(&path).unwrap();
    assert_eq!(restored.first_run, 10);
    assert_eq!(restored.last_run, 12);
    assert_eq!(restored.load_ohms, 4.7);
    assert_eq!(restored.normalization, Normalization::Rms);
    assert_eq!(restored.sensor, cfg.sensor);
}

#[test]
fn json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");

    let mut cfg = BenchConfig::default();
    cfg.offset_min = -5;
    cfg.offset_max = 5;
    save_config(&path, &cfg).unwrap();

    let restored = load_config(&path).unwrap();
    assert_eq!(restored.offset_sweep(), -5..=5);
}

#[test]
fn partial_config_keeps_defaults_for_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.yaml");
    std::fs::write(&path, "load_ohms: 1.5\n").unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.load_ohms, 1.5);
    assert_eq!(cfg.first_run, BenchConfig::default().first_run);
    assert_eq!(cfg.divider_ratio, BenchConfig::default().divider_ratio);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_or_default(dir.path().join("absent.yaml")).unwrap();
    assert_eq!(cfg.first_run, BenchConfig::default().first_run);
    assert_eq!(cfg.load_ohms, BenchConfig::default().load_ohms);
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    let err = save_config(&path, &BenchConfig::default()).unwrap_err();
    assert!(matches!(err, ScopeError::UnsupportedConfigFormat(_)));
}
