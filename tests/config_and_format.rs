//! Integration tests for FormatConfig and matrix text rendering.

use dense_matrix::{FormatConfig, Matrix, Notation};

// ---------------------------------------------------------------------------
// FormatConfig / Notation
// ---------------------------------------------------------------------------

#[test]
fn default_config_is_fixed_four_digits() {
    let config = FormatConfig::default();
    assert_eq!(config.precision, 4);
    assert_eq!(config.notation, Notation::Fixed);
    assert_eq!(config.max_rows, None);
    assert_eq!(config.max_cols, None);
}

#[test]
fn notation_from_str() {
    let n: Notation = "scientific".parse().unwrap();
    assert_eq!(n, Notation::Scientific);
    let err = "hex".parse::<Notation>().unwrap_err();
    assert!(err.contains("Unknown notation"));
}

#[test]
fn format_config_round_trips_json() {
    let config = FormatConfig::new(2, Notation::Scientific)
        .with_max_rows(3)
        .with_max_cols(5);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("precision"));
    assert!(json.contains("Scientific"));
    let parsed: FormatConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn format_config_fills_missing_fields_from_json() {
    let config: FormatConfig = serde_json::from_str(r#"{"precision": 3}"#).unwrap();
    assert_eq!(config.precision, 3);
    assert_eq!(config.notation, Notation::Fixed);
    assert_eq!(config.max_rows, None);
    assert_eq!(config.max_cols, None);
}

#[test]
fn format_config_requires_precision() {
    assert!(serde_json::from_str::<FormatConfig>(r#"{"notation": "Fixed"}"#).is_err());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn display_uses_default_config() {
    let m = Matrix::identity(2).unwrap();
    assert_eq!(m.to_string(), "[[1.0000, 0.0000],\n [0.0000, 1.0000]]");
}

#[test]
fn single_element_renders_on_one_line() {
    let m = Matrix::from_rows(&[[2.5]]).unwrap();
    let config = FormatConfig::new(1, Notation::Fixed);
    assert_eq!(m.display_with(&config).to_string(), "[[2.5]]");
}

#[test]
fn scientific_notation() {
    let m = Matrix::from_rows(&[[1500.0, -0.25]]).unwrap();
    let config = FormatConfig::new(2, Notation::Scientific);
    assert_eq!(m.display_with(&config).to_string(), "[[1.50e3, -2.50e-1]]");
}

#[test]
fn truncates_rows_and_columns() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    let config = FormatConfig::new(0, Notation::Fixed)
        .with_max_rows(2)
        .with_max_cols(2);
    assert_eq!(
        m.display_with(&config).to_string(),
        "[[1, 2, ...],\n [4, 5, ...],\n ...]"
    );
}

#[test]
fn limits_larger_than_shape_show_everything() {
    let m = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    let config = FormatConfig::new(0, Notation::Fixed)
        .with_max_rows(10)
        .with_max_cols(10);
    assert_eq!(m.display_with(&config).to_string(), "[[1, 2]]");
}
