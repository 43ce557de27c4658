// File: crates/speed-chart-core/tests/loader.rs
// Purpose: CSV parsing by header name, file loading and failure degradation.

use std::io::Write;

use speed_chart_core::{load_dataset, load_records, parse_records, Category, LoadError, Source};

const SAMPLE: &str = "name,speed,category\n\
Cheetah,120,carnivore\n\
Sloth,0.27,herbivore\n\
Ghost,nan,omnivore\n";

#[test]
fn end_to_end_sample_drops_non_numeric_speed() {
    let ds = speed_chart_core::clean(parse_records(SAMPLE).expect("parse"));
    let got: Vec<(&str, f64, Category)> = ds.iter().map(|d| (d.name(), d.value(), d.category())).collect();
    assert_eq!(
        got,
        vec![("Cheetah", 120.0, Category::Carnivore), ("Sloth", 0.27, Category::Herbivore)]
    );
}

#[test]
fn column_order_is_irrelevant_and_diet_is_accepted() {
    let text = "diet,name,speed\ncarnivore,Lion,80\n";
    let rows = parse_records(text).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Lion");
    assert_eq!(rows[0].speed, "80");
    assert_eq!(rows[0].category, "carnivore");
}

#[test]
fn category_header_wins_over_diet() {
    let text = "name,speed,diet,category\nBear,56,carnivore,omnivore\n";
    let rows = parse_records(text).expect("parse");
    assert_eq!(rows[0].category, "omnivore");
}

#[test]
fn short_rows_read_as_empty_fields() {
    let text = "name,speed,category\nHalf,12\n";
    let rows = parse_records(text).expect("parse");
    assert_eq!(rows[0].category, "");
    assert!(speed_chart_core::clean(rows).is_empty());
}

#[test]
fn missing_column_is_an_error() {
    let err = parse_records("name,velocity,category\nA,1,herbivore\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("speed")));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(SAMPLE.as_bytes()).expect("write");
    let source = Source::from(file.path());
    assert_eq!(load_records(&source).expect("load").len(), 3);
    assert_eq!(load_dataset(&source).len(), 2);
}

#[test]
fn invalid_utf8_row_is_skipped_not_fatal() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"name,speed,category\nCheetah,120,carnivore\nBad\xff,10,herbivore\n").expect("write");
    let source = Source::from(file.path());
    let rows = load_records(&source).expect("load");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Cheetah");
    assert_eq!(load_dataset(&source).names().collect::<Vec<_>>(), vec!["Cheetah"]);
}

#[test]
fn invalid_utf8_header_is_an_error() {
    let err = parse_records(b"na\xffme,speed,category\nA,1,herbivore\n").unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn missing_file_degrades_to_empty_dataset() {
    let source = Source::parse("does/not/exist.csv");
    assert!(matches!(load_records(&source), Err(LoadError::Io { .. })));
    assert!(load_dataset(&source).is_empty());
}

#[test]
fn source_parse_detects_urls() {
    assert_eq!(Source::parse("https://example.org/a.csv"), Source::Url("https://example.org/a.csv".into()));
    assert!(matches!(Source::parse("data/sample_animals.csv"), Source::Path(_)));
}
