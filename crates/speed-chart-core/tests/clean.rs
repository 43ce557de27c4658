// File: crates/speed-chart-core/tests/clean.rs
// Purpose: Validate record filtering, ordering and the top-N cutoff.

use proptest::prelude::*;
use speed_chart_core::{clean, clean_with_limit, Category, RawRecord};
use speed_chart_core::clean::rejected;

fn raw(name: &str, speed: &str, category: &str) -> RawRecord {
    RawRecord::new(name, speed, category)
}

#[test]
fn sorts_descending_by_value() {
    let ds = clean(vec![
        raw("A", "10", "herbivore"),
        raw("B", "50", "carnivore"),
        raw("C", "30", "omnivore"),
    ]);
    let got: Vec<(&str, f64)> = ds.iter().map(|d| (d.name(), d.value())).collect();
    assert_eq!(got, vec![("B", 50.0), ("C", 30.0), ("A", 10.0)]);
}

#[test]
fn zero_and_non_numeric_values_are_dropped() {
    let ds = clean(vec![
        raw("Rock", "0", "herbivore"),
        raw("Blob", "quick", "herbivore"),
        raw("Neg", "-4", "omnivore"),
        raw("Inf", "inf", "omnivore"),
        raw("Ok", "0.01", "omnivore"),
    ]);
    assert_eq!(ds.names().collect::<Vec<_>>(), vec!["Ok"]);
}

#[test]
fn names_are_trimmed_and_placeholders_dropped() {
    let ds = clean(vec![
        raw("  Hare ", "70", "herbivore"),
        raw("nan", "80", "herbivore"),
        raw("NAN", "80", "herbivore"),
        raw("   ", "80", "herbivore"),
    ]);
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.as_slice()[0].name(), "Hare");
}

#[test]
fn categories_match_case_insensitively_and_are_not_coerced() {
    let ds = clean(vec![
        raw("Lion", "80", " Carnivore"),
        raw("Bear", "56", "OMNIVORE"),
        raw("Moth", "20", "insectivore"),
        raw("Cow", "40", ""),
    ]);
    let cats: Vec<Category> = ds.iter().map(|d| d.category()).collect();
    assert_eq!(cats, vec![Category::Carnivore, Category::Omnivore]);
}

#[test]
fn truncates_to_forty() {
    let rows = (1..=100).map(|i| raw(&format!("a{i}"), &i.to_string(), "herbivore"));
    let ds = clean(rows);
    assert_eq!(ds.len(), 40);
    assert_eq!(ds.max_value(), Some(100.0));
    assert_eq!(ds.as_slice()[39].value(), 61.0);
}

#[test]
fn custom_limit_is_honoured() {
    let rows = (1..=10).map(|i| raw(&format!("a{i}"), &i.to_string(), "omnivore"));
    assert_eq!(clean_with_limit(rows, 3).len(), 3);

    let many = (1..=100).map(|i| raw(&format!("b{i}"), &i.to_string(), "omnivore"));
    let ds = clean_with_limit(many, 100);
    assert_eq!(ds.len(), 40);
    assert_eq!(ds.as_slice()[39].value(), 61.0);
}

#[test]
fn ties_keep_source_order() {
    let ds = clean(vec![
        raw("first", "5", "herbivore"),
        raw("second", "5", "carnivore"),
        raw("third", "5", "omnivore"),
    ]);
    assert_eq!(ds.names().collect::<Vec<_>>(), vec!["first", "second", "third"]);
}

#[test]
fn rejected_reports_reason_per_row() {
    let rows = vec![raw("Ok", "3", "herbivore"), raw("Ghost", "nan", "omnivore")];
    let bad = rejected(&rows);
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].0, 1);
    assert_eq!(bad[0].2.to_string(), "speed is not finite");
}

fn arb_row() -> impl Strategy<Value = RawRecord> {
    let name = prop_oneof![
        Just(String::new()),
        Just("nan".to_string()),
        "[A-Za-z ]{1,12}",
    ];
    let speed = prop_oneof![
        (-50.0f64..500.0).prop_map(|v| v.to_string()),
        Just("0".to_string()),
        Just("nan".to_string()),
        Just("fast".to_string()),
    ];
    let category = prop_oneof![
        Just("herbivore"),
        Just("Omnivore"),
        Just(" CARNIVORE "),
        Just("insectivore"),
        Just(""),
    ];
    (name, speed, category).prop_map(|(n, s, c)| RawRecord::new(n, s, c))
}

fn is_valid(r: &RawRecord) -> bool {
    let name = r.name.trim();
    let value_ok = r.speed.trim().parse::<f64>().map(|v| v.is_finite() && v > 0.0).unwrap_or(false);
    let cat = r.category.trim().to_lowercase();
    !name.is_empty()
        && !name.eq_ignore_ascii_case("nan")
        && value_ok
        && ["herbivore", "omnivore", "carnivore"].contains(&cat.as_str())
}

proptest! {
    #[test]
    fn dataset_is_sorted_bounded_and_valid(rows in prop::collection::vec(arb_row(), 0..120)) {
        let expected_valid = rows.iter().filter(|r| is_valid(r)).count();
        let ds = clean(rows);

        prop_assert!(ds.len() <= 40);
        prop_assert_eq!(ds.len(), expected_valid.min(40));
        for w in ds.as_slice().windows(2) {
            prop_assert!(w[0].value() >= w[1].value());
        }
        for d in &ds {
            prop_assert!(!d.name().is_empty());
            prop_assert!(d.value().is_finite() && d.value() > 0.0);
        }
    }
}
