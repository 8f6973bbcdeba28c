use scopefit::{saturate, Acs712};

#[test]
fn clamp_passes_values_inside_the_bounds() {
    for v in [0.4, 0.41, 2.5, 4.59, 4.6] {
        assert_eq!(saturate(v, 0.4, 4.6), v);
    }
}

#[test]
fn clamp_clips_to_the_nearest_bound() {
    assert_eq!(saturate(0.39, 0.4, 4.6), 0.4);
    assert_eq!(saturate(-3.0, 0.4, 4.6), 0.4);
    assert_eq!(saturate(4.61, 0.4, 4.6), 4.6);
    assert_eq!(saturate(12.0, 0.4, 4.6), 4.6);
}

#[test]
fn zero_current_sits_at_mid_supply() {
    let sensor = Acs712::default();
    assert_eq!(sensor.offset(), 2.5);
    assert_eq!(sensor.output_ideal(0.0), 2.5);
    assert_eq!(sensor.output_saturated(0.0), 2.5);
}

#[test]
fn linear_range_follows_the_margin() {
    let sensor = Acs712::default();
    let (lo, hi) = sensor.linear_current_range();
    // (0.3 - 2.5) / 0.185 and (5.0 - 0.3 - 2.5) / 0.185
    assert!((lo + 11.891891891891891).abs() < 1e-9, "lo was {lo}");
    assert!((hi - 11.891891891891891).abs() < 1e-9, "hi was {hi}");
}

#[test]
fn max_linear_rms_is_the_linear_peak_over_sqrt_two() {
    let sensor = Acs712::default();
    let expected = 11.891891891891891 / 2f64.sqrt();
    assert!((sensor.max_linear_rms() - expected).abs() < 1e-9);
}

#[test]
fn full_scale_range_follows_the_supply_rails() {
    let sensor = Acs712::default();
    let (lo, hi) = sensor.current_range();
    assert!((lo + 13.513513513513513).abs() < 1e-9);
    assert!((hi - 13.513513513513513).abs() < 1e-9);
}

#[test]
fn saturated_curve_never_leaves_the_clamp_band() {
    let sensor = Acs712::default();
    let curve = sensor.saturated_curve(0.05);
    assert!(!curve.is_empty());
    for p in &curve {
        assert!(p[1] >= sensor.clip_low && p[1] <= sensor.clip_high, "{p:?}");
    }
    // the ideal curve must actually exceed the band for the clamp to matter
    let ideal = sensor.transfer_curve(0.05);
    assert!(ideal.iter().any(|p| p[1] < sensor.clip_low));
    assert!(ideal.iter().any(|p| p[1] > sensor.clip_high));
}

#[test]
fn curves_span_the_full_scale_range() {
    let sensor = Acs712::default();
    let (lo, hi) = sensor.current_range();
    let curve = sensor.transfer_curve(0.1);
    assert_eq!(curve[0][0], lo);
    assert!(curve.last().unwrap()[0] < hi);
}
