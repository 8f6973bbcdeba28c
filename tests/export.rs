use scopefit::export::{default_export_name, write_figure_csv};
use scopefit::figure::{Figure, Series};

#[test]
fn figure_csv_is_long_form_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.csv");

    let figure = Figure::new("test figure")
        .series(Series::scatter(
            "sensor response",
            vec![[0.0, 2.5], [1.0, 2.7]],
        ))
        .series(Series::line("ideal gain", vec![[-1.0, 2.3], [1.0, 2.7]]));
    write_figure_csv(&path, &figure).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.trim().split('\n').collect();
    assert_eq!(lines[0], "series,x,y");
    assert_eq!(lines.len(), 1 + 4);
    assert!(lines[1].starts_with("sensor response,"));
    assert!(lines[3].starts_with("ideal gain,"));
}

#[test]
fn default_export_name_slugs_the_title() {
    let name = default_export_name("ACS712-05B saturation XY", "csv");
    assert!(
        name.starts_with("acs712_05b_saturation_xy_"),
        "name was {name}"
    );
    assert!(name.ends_with(".csv"));
}
