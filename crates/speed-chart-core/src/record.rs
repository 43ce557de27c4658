// File: crates/speed-chart-core/src/record.rs
// Summary: Record model: raw CSV rows, validated data points and the sorted, bounded dataset.
// Notes:
// - `Datum` and `Dataset` have private fields so their invariants can only be
//   established through the validating constructors and the cleaner.

use std::fmt;
use std::str::FromStr;

/// Diet category of an animal. The set is closed; anything else is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Herbivore,
    Omnivore,
    Carnivore,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 3] = [Category::Herbivore, Category::Omnivore, Category::Carnivore];

    /// Lower-case key as it appears in source files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Herbivore => "herbivore",
            Category::Omnivore => "omnivore",
            Category::Carnivore => "carnivore",
        }
    }

    /// Capitalized label used in the legend.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Herbivore => "Herbivore",
            Category::Omnivore => "Omnivore",
            Category::Carnivore => "Carnivore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Rejection;

    /// Trims and lower-cases before matching; unknown values are not coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or(Rejection::UnknownCategory)
    }
}

/// Why a raw row did not become a [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    MissingName,
    PlaceholderName,
    UnparsableValue,
    NonFiniteValue,
    NonPositiveValue,
    UnknownCategory,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::MissingName => "name is empty",
            Rejection::PlaceholderName => "name is a missing-value placeholder",
            Rejection::UnparsableValue => "speed is not a number",
            Rejection::NonFiniteValue => "speed is not finite",
            Rejection::NonPositiveValue => "speed is not greater than zero",
            Rejection::UnknownCategory => "category is not herbivore, omnivore or carnivore",
        };
        f.write_str(msg)
    }
}

/// Untyped row as read from the source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub speed: String,
    pub category: String,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, speed: impl Into<String>, category: impl Into<String>) -> Self {
        Self { name: name.into(), speed: speed.into(), category: category.into() }
    }
}

/// Validated record: non-empty name, positive finite value, known category.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    name: String,
    value: f64,
    category: Category,
}

impl Datum {
    /// Build a datum, checking the name and value predicates.
    pub fn new(name: &str, value: f64, category: Category) -> Result<Self, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::MissingName);
        }
        if name.eq_ignore_ascii_case("nan") {
            return Err(Rejection::PlaceholderName);
        }
        if !value.is_finite() {
            return Err(Rejection::NonFiniteValue);
        }
        if value <= 0.0 {
            return Err(Rejection::NonPositiveValue);
        }
        Ok(Self { name: name.to_string(), value, category })
    }

    /// Validate every field of a raw row. The first failing predicate wins.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, Rejection> {
        let value = raw
            .speed
            .trim()
            .parse::<f64>()
            .map_err(|_| Rejection::UnparsableValue)?;
        let category = raw.category.parse::<Category>()?;
        Self::new(&raw.name, value, category)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn value(&self) -> f64 { self.value }
    pub fn category(&self) -> Category { self.category }
}

/// Cleaned working set: sorted by value, non-increasing, at most the
/// configured top-N long.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Datum>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Caller guarantees `items` is already sorted descending and truncated.
    pub(crate) fn from_sorted(items: Vec<Datum>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0].value >= w[1].value));
        Self { items }
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Datum> { self.items.iter() }
    pub fn as_slice(&self) -> &[Datum] { &self.items }

    /// Largest value; the first element because of the ordering invariant.
    pub fn max_value(&self) -> Option<f64> {
        self.items.first().map(Datum::value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Datum::name)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Datum;
    type IntoIter = std::slice::Iter<'a, Datum>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" CarniVore ".parse::<Category>(), Ok(Category::Carnivore));
        assert_eq!("insectivore".parse::<Category>(), Err(Rejection::UnknownCategory));
    }

    #[test]
    fn datum_rejects_placeholder_names() {
        assert_eq!(Datum::new("NaN", 3.0, Category::Omnivore), Err(Rejection::PlaceholderName));
        assert_eq!(Datum::new("   ", 3.0, Category::Omnivore), Err(Rejection::MissingName));
    }

    #[test]
    fn datum_from_raw_checks_value() {
        let raw = RawRecord::new("Ghost", "nan", "omnivore");
        assert_eq!(Datum::from_raw(&raw), Err(Rejection::NonFiniteValue));
        let raw = RawRecord::new("Rock", "0", "herbivore");
        assert_eq!(Datum::from_raw(&raw), Err(Rejection::NonPositiveValue));
        let raw = RawRecord::new("Blob", "fast", "herbivore");
        assert_eq!(Datum::from_raw(&raw), Err(Rejection::UnparsableValue));
    }
}
