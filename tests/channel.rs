use std::path::Path;

use scopefit::{
    run_csv_path, sibling_channel_path, Acquisition, Channel, Normalization, ScopeError,
};

/// A minimal but well-formed Tektronix channel export: six columns, the
/// metadata block in columns one/two, time/sample pairs in columns four/five.
fn tek_csv(source: &str, scale: f64) -> String {
    let sample = |v: f64| format!("{:.6}", v * scale);
    [
        format!("Record Length,5.000000e+00,,0.000000000,{},", sample(1.0)),
        format!("Sample Interval,4.000000e-07,,0.000000400,{},", sample(2.0)),
        format!("Trigger Point,2.000000e+00,,0.000000800,{},", sample(3.0)),
        format!("Source,{source},,0.000001200,{},", sample(4.0)),
        format!("Vertical Units,V,,0.000001600,{},", sample(5.0)),
        "Vertical Scale,2.000000e+00,,,,".to_string(),
        "Vertical Offset,0.000000e+00,,,,".to_string(),
        "Horizontal Units,s,,,,".to_string(),
        "Horizontal Scale,1.000000e-03,,,,".to_string(),
        "Pt Fmt,Y,,,,".to_string(),
        "Yzero,0.000000e+00,,,,".to_string(),
        "Probe Atten,1.000000e+01,,,,".to_string(),
        "Firmware Version,FV:v1.26,,,,".to_string(),
    ]
    .join("\n")
        + "\n"
}

fn write_channel(dir: &Path, name: &str, source: &str, scale: f64) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, tek_csv(source, scale)).unwrap();
    path
}

#[test]
fn parses_metadata_and_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_channel(dir.path(), "F0040CH1.CSV", "CH1", 1.0);

    let ch = Channel::from_path(&path).unwrap();
    let meta = ch.meta();
    assert_eq!(meta.record_length, 5);
    assert_eq!(meta.sample_interval, 4.0e-7);
    assert_eq!(meta.trigger_point, 2);
    assert_eq!(meta.source, "CH1");
    assert_eq!(meta.vertical_units, "V");
    assert_eq!(meta.vertical_scale, 2.0);
    assert_eq!(meta.probe_atten, 10.0);
    assert_eq!(meta.firmware_version, "FV:v1.26");

    assert_eq!(ch.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(ch.time().len(), 5);
    assert!((ch.time()[1] - 4.0e-7).abs() < 1e-15);
    // unit normalization keeps the raw values
    assert_eq!(ch.norm(), 1.0);
    assert_eq!(ch.normalized(), ch.values());
}

#[test]
fn param_accessors_parse_and_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_channel(dir.path(), "F0040CH1.CSV", "CH1", 1.0);
    let ch = Channel::from_path(&path).unwrap();

    assert_eq!(ch.param("Pt Fmt").unwrap(), "Y");
    assert_eq!(ch.float_param("Probe Atten").unwrap(), 10.0);
    assert_eq!(ch.int_param("Record Length").unwrap(), 5);
    assert!(matches!(
        ch.param("Acquisition Mode").unwrap_err(),
        ScopeError::MissingParam(_)
    ));
}

#[test]
fn rms_normalization_divides_by_the_record_rms() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_channel(dir.path(), "F0040CH1.CSV", "CH1", 1.0);

    let ch = Channel::from_path_with(&path, Normalization::Rms).unwrap();
    // RMS of 1..5 over the record length of 5
    let rms = (55.0f64 / 5.0).sqrt();
    assert!((ch.norm() - rms).abs() < 1e-12);
    assert!((ch.normalized()[0] - 1.0 / rms).abs() < 1e-12);
    assert_eq!(ch.values()[0], 1.0);
}

#[test]
fn invert_flips_raw_and_normalized_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_channel(dir.path(), "F0040CH1.CSV", "CH1", 1.0);

    let mut ch = Channel::from_path(&path).unwrap();
    ch.invert();
    assert_eq!(ch.values(), &[-1.0, -2.0, -3.0, -4.0, -5.0]);
    assert_eq!(ch.normalized(), &[-1.0, -2.0, -3.0, -4.0, -5.0]);
}

#[test]
fn missing_metadata_parameter_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.CSV");
    // drop everything after the first two parameters
    let text = tek_csv("CH1", 1.0)
        .lines()
        .take(5)
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&path, text).unwrap();

    let err = Channel::from_path(&path).unwrap_err();
    assert!(matches!(err, ScopeError::MissingParam(_)));
}

#[test]
fn acquisition_loads_siblings_by_suffix_substitution() {
    let dir = tempfile::tempdir().unwrap();
    let run_dir = dir.path().join("ALL0040");
    std::fs::create_dir(&run_dir).unwrap();
    write_channel(&run_dir, "F0040CH1.CSV", "CH1", 1.0);
    write_channel(&run_dir, "F0040CH2.CSV", "CH2", 2.0);

    let base = run_csv_path(dir.path(), 40, 1);
    assert_eq!(base, run_dir.join("F0040CH1.CSV"));

    let acq = Acquisition::load(&base, 2, Normalization::Unit).unwrap();
    assert_eq!(acq.channels().len(), 2);
    assert_eq!(acq.channel(0).meta().source, "CH1");
    assert_eq!(acq.channel(1).meta().source, "CH2");
    assert_eq!(acq.channel(1).values()[0], 2.0);
}

#[test]
fn sibling_path_requires_the_suffix() {
    let err = sibling_channel_path(Path::new("DATA/capture.csv"), "CH1", "CH2").unwrap_err();
    assert!(matches!(err, ScopeError::NoChannelSuffix { .. }));
}

#[test]
fn run_path_pads_the_run_number() {
    let path = run_csv_path(Path::new("DATA"), 7, 2);
    assert!(path.ends_with("ALL0007/F0007CH2.CSV"), "{}", path.display());
}
