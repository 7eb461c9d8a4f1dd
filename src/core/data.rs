use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{BarChartError, BarChartResult};

/// One input record for a render call.
///
/// A single call must use one shape throughout: all bare values, or all
/// name/value records. The untagged serde representation maps a JSON array
/// of numbers or of `{name, value}` objects directly onto `Vec<DataPoint>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(f64),
    Named { name: String, value: f64 },
}

impl DataPoint {
    #[must_use]
    pub fn value(value: f64) -> Self {
        Self::Value(value)
    }

    #[must_use]
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self::Named {
            name: name.into(),
            value,
        }
    }
}

/// Validated name/value record used by chart projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub name: String,
    pub value: f64,
}

impl NamedRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Extracts name/value records, rejecting bare values and invalid numbers.
///
/// The first item that is not a named record fails with `ShapeMismatch`
/// naming its index.
pub fn named_records(data: &[DataPoint]) -> BarChartResult<Vec<NamedRecord>> {
    data.iter()
        .enumerate()
        .map(|(index, point)| match point {
            DataPoint::Named { name, value } => {
                validate_value(*value, index)?;
                Ok(NamedRecord::new(name.clone(), *value))
            }
            DataPoint::Value(_) => Err(BarChartError::ShapeMismatch { index }),
        })
        .collect()
}

/// Extracts bare values, rejecting named records and invalid numbers.
pub fn bare_values(data: &[DataPoint]) -> BarChartResult<Vec<f64>> {
    data.iter()
        .enumerate()
        .map(|(index, point)| match point {
            DataPoint::Value(value) => {
                validate_value(*value, index)?;
                Ok(*value)
            }
            DataPoint::Named { .. } => Err(BarChartError::ShapeMismatch { index }),
        })
        .collect()
}

fn validate_value(value: f64, index: usize) -> BarChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BarChartError::InvalidData(format!(
            "value at index {index} must be finite and non-negative"
        )));
    }
    Ok(())
}

/// Largest value in the sequence, clamped to 0 for an empty sequence.
#[must_use]
pub fn max_value(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0.max(0.0))
}

/// Literal label text for a value: integral floats print without a
/// fractional part (`4`, not `4.0`).
#[must_use]
pub fn format_value(value: f64) -> String {
    value.to_string()
}
