//! Pipeline behaviour as seen by callers of the facade.

use coordex::*;

#[test]
fn named_points_line_scenario() {
    let text = r#"Point Alpha: 51°12'32.2"N 32°34'23.1"E and point Beta: 51°13'00.0"N 32°35'00.0"E"#;
    let result = extract(text).unwrap();
    assert_eq!(result.coordinates.len(), 2);
    assert_eq!(result.geometry_type, GeometryType::Line);
    assert_eq!(result.message, "Successfully extracted 2 coordinate(s)");
    let names: Vec<&str> = result.coordinates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Point Alpha", "point Beta"]);
}

#[test]
fn every_extracted_coordinate_is_valid() {
    let text = "Grid: 10.5, 20.5; 95.0, 10.0; -33.9, 151.2; 45.0, 200.0; N12.2112 W32.434";
    let result = extract(text).unwrap();
    assert_eq!(result.coordinates.len(), 3);
    assert!(result.coordinates.iter().all(|c| validate_coordinate(&c.coord)));
}

#[test]
fn restricted_options_flow_through() {
    let options = ExtractOptions {
        formats: vec![CoordinateFormat::HemisphereDecimal],
        max_context_chars: 10,
        ..ExtractOptions::default()
    };
    let text = "Grid: 10.5, 20.5 and N12.2112 W32.434 tonight";
    let result = extract_with_options(text, &options).unwrap();
    assert_eq!(result.coordinates.len(), 1);
    assert_eq!(result.coordinates[0].original_format, "N12.2112 W32.434");
    assert!(result.coordinates[0].context.chars().count() <= 10);
}

#[test]
fn input_errors_carry_messages() {
    let err = extract("").unwrap_err();
    assert_eq!(err.to_string(), "Text is empty");

    let big = "x".repeat(MAX_INPUT_BYTES + 10);
    let err = extract_bytes(big.as_bytes(), &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, InputError::TooLarge { limit } if limit == MAX_INPUT_BYTES));
}
