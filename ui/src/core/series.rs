//! Category series as delivered by the server and the cleaned form the charts consume.
//!
//! The server hands over loosely typed label/value arrays (amounts may arrive as
//! numbers, numeric strings, `null`, or garbage). [`normalize`] turns that into a
//! [`CategorySeries`] whose values are all finite and strictly positive, keeping
//! labels aligned with their values and keeping the input order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped label/value payload. Either side may be missing entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub labels: Option<Vec<Value>>,
    #[serde(default)]
    pub values: Option<Vec<Value>>,
}

impl RawSeries {
    pub fn new<L, V>(labels: L, values: V) -> Self
    where
        L: IntoIterator,
        L::Item: Into<Value>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Self {
            labels: Some(labels.into_iter().map(Into::into).collect()),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// Aligned label/value pairs describing a spending or income breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl CategorySeries {
    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> f64 {
        self.values.iter().take(self.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Re-apply the normalization rules to already typed data.
    pub fn normalized(&self) -> Self {
        let mut out = Self::default();
        for (label, value) in self.iter() {
            if let Some(amount) = chartable(value) {
                out.labels.push(label.to_string());
                out.values.push(amount);
            }
        }
        out
    }
}

/// Clean a raw payload into a chartable series.
///
/// Only the overlapping prefix of labels and values is considered. Values are
/// coerced to numbers, made non-negative, and dropped unless finite and > 0.
pub fn normalize(raw: &RawSeries) -> CategorySeries {
    let (Some(labels), Some(values)) = (raw.labels.as_deref(), raw.values.as_deref()) else {
        return CategorySeries::default();
    };

    let mut out = CategorySeries::default();
    for (label, value) in labels.iter().zip(values) {
        if let Some(amount) = chartable(coerce_number(value)) {
            out.labels.push(label_text(label));
            out.values.push(amount);
        }
    }
    out
}

/// Loose numeric coercion for server payload values, following JavaScript's
/// `Number()`: numeric strings (including `0x`/`0o`/`0b` literals) parse,
/// an array coerces through its only element, and anything unreadable
/// becomes `0.0`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_str(s).unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            // `[true]` stringifies to "true", which is not a number.
            [Value::Bool(_)] => 0.0,
            [only] => coerce_number(only),
            _ => 0.0,
        },
        Value::Object(_) => 0.0,
    }
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return Some(value);
    }
    // Rust's float parser also accepts "inf"/"nan" spellings; those are not amounts.
    if trimmed
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Unsigned `0x1A` / `0o17` / `0b101` literals.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    text[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn chartable(value: f64) -> Option<f64> {
    let magnitude = value.abs();
    (magnitude.is_finite() && magnitude > 0.0).then_some(magnitude)
}

fn label_text(label: &Value) -> String {
    match label {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_garbage_and_flips_negatives() {
        let raw = RawSeries::new(
            ["Rent", "Food", "Misc"],
            [json!(1200), json!("abc"), json!(-50)],
        );
        let series = normalize(&raw);
        assert_eq!(series.labels, vec!["Rent", "Misc"]);
        assert_eq!(series.values, vec![1200.0, 50.0]);
    }

    #[test]
    fn all_zero_values_yield_empty_series() {
        let raw = RawSeries::new(["A", "B", "C"], [0, 0, 0]);
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn absent_sides_yield_empty_series() {
        assert!(normalize(&RawSeries::default()).is_empty());
        let only_labels = RawSeries {
            labels: Some(vec![json!("Rent")]),
            values: None,
        };
        assert!(normalize(&only_labels).is_empty());
    }

    #[test]
    fn mismatched_lengths_use_overlapping_prefix() {
        let raw = RawSeries::new(["A", "B", "C"], [1, 2]);
        let series = normalize(&raw);
        assert_eq!(series.labels, vec!["A", "B"]);

        let raw = RawSeries::new(["A"], [1, 2, 3]);
        assert_eq!(normalize(&raw).values, vec![1.0]);
    }

    #[test]
    fn numeric_strings_and_booleans_coerce() {
        let raw = RawSeries::new(
            ["a", "b", "c", "d", "e", "f"],
            [
                json!(" 12.5 "),
                json!(""),
                json!(true),
                json!(null),
                json!("1e2"),
                json!("Infinity"),
            ],
        );
        let series = normalize(&raw);
        assert_eq!(series.labels, vec!["a", "c", "e"]);
        assert_eq!(series.values, vec![12.5, 1.0, 100.0]);
    }

    #[test]
    fn radix_literals_and_single_element_arrays_coerce() {
        assert_eq!(coerce_number(&json!("0x1A")), 26.0);
        assert_eq!(coerce_number(&json!("0o17")), 15.0);
        assert_eq!(coerce_number(&json!("0b101")), 5.0);
        assert_eq!(coerce_number(&json!("0xZZ")), 0.0);
        assert_eq!(coerce_number(&json!("-0x10")), 0.0);
        assert_eq!(coerce_number(&json!([5])), 5.0);
        assert_eq!(coerce_number(&json!(["7.5"])), 7.5);
        assert_eq!(coerce_number(&json!([[3]])), 3.0);
        assert_eq!(coerce_number(&json!([])), 0.0);
        assert_eq!(coerce_number(&json!([true])), 0.0);
        assert_eq!(coerce_number(&json!([1, 2])), 0.0);
        assert_eq!(coerce_number(&json!({ "amount": 4 })), 0.0);

        let raw = RawSeries::new(["hex", "boxed", "pair"], [json!("0x1A"), json!([5]), json!([1, 2])]);
        let series = normalize(&raw);
        assert_eq!(series.labels, vec!["hex", "boxed"]);
        assert_eq!(series.values, vec![26.0, 5.0]);
    }

    #[test]
    fn non_string_labels_are_stringified() {
        let raw = RawSeries {
            labels: Some(vec![json!(2024), json!(null)]),
            values: Some(vec![json!(1), json!(2)]),
        };
        assert_eq!(normalize(&raw).labels, vec!["2024", ""]);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let raw = RawSeries::new(
            ["w", "x", "y", "z"],
            [json!(-3), json!("7"), json!(0), json!("n/a")],
        );
        let once = normalize(&raw);
        assert_eq!(once.normalized(), once);

        let round_trip = normalize(&RawSeries::new(once.labels.clone(), once.values.clone()));
        assert_eq!(round_trip, once);
    }

    #[test]
    fn output_is_ordered_subset_of_positive_values() {
        let raw = RawSeries::new(
            ["a", "b", "c", "d", "e"],
            [json!(5), json!(-1), json!("x"), json!(0.25), json!(0)],
        );
        let series = normalize(&raw);
        assert!(series.len() <= 5);
        assert!(series.values.iter().all(|v| *v > 0.0));
        assert_eq!(series.labels, vec!["a", "b", "d"]);
    }

    #[test]
    fn deserializes_partial_payload() {
        let raw: RawSeries = serde_json::from_str(r#"{"labels":["Rent"]}"#).unwrap();
        assert!(raw.values.is_none());
    }
}
