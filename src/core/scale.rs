use indexmap::IndexMap;

use crate::error::{BarChartError, BarChartResult};

/// Linear mapping from a `[0, domain_max]` data domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical chart maps larger values to smaller y coordinates. A zero
/// domain maximum is legal and collapses every value onto `range_start`,
/// so empty or all-zero data never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_start: f64, range_end: f64) -> BarChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(BarChartError::InvalidData(
                "scale domain maximum must be finite and non-negative".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(BarChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    pub fn position(self, value: f64) -> BarChartResult<f64> {
        if !value.is_finite() || value < 0.0 {
            return Err(BarChartError::InvalidData(
                "value must be finite and non-negative".to_owned(),
            ));
        }

        if self.domain_max == 0.0 {
            return Ok(self.range_start);
        }

        let normalized = value / self.domain_max;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }
}

/// Categorical scale partitioning `[0, extent]` into one uniform band per
/// name, in insertion order, with a fixed inner-padding fraction of each
/// band step.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    slots: IndexMap<String, usize>,
    extent: f64,
    inner_padding: f64,
}

impl BandScale {
    pub fn new<I, S>(names: I, extent: f64, inner_padding: f64) -> BarChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !extent.is_finite() || extent < 0.0 {
            return Err(BarChartError::InvalidData(
                "band extent must be finite and non-negative".to_owned(),
            ));
        }
        if !inner_padding.is_finite() || !(0.0..1.0).contains(&inner_padding) {
            return Err(BarChartError::InvalidData(
                "band inner padding must be in [0, 1)".to_owned(),
            ));
        }

        let mut slots = IndexMap::new();
        for name in names {
            let name = name.into();
            let next_slot = slots.len();
            if slots.insert(name.clone(), next_slot).is_some() {
                return Err(BarChartError::InvalidData(format!(
                    "duplicate category name `{name}`"
                )));
            }
        }

        Ok(Self {
            slots,
            extent,
            inner_padding,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.extent / self.slots.len() as f64
        }
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.inner_padding)
    }

    /// Left edge of the band for `name`. Padding is split evenly on both
    /// sides of the band inside its step.
    pub fn position(&self, name: &str) -> BarChartResult<f64> {
        let slot = self.slots.get(name).ok_or_else(|| {
            BarChartError::InvalidData(format!("unknown category name `{name}`"))
        })?;
        let step = self.step();
        Ok(*slot as f64 * step + step * self.inner_padding * 0.5)
    }

    /// Horizontal center of the band for `name`.
    pub fn center(&self, name: &str) -> BarChartResult<f64> {
        Ok(self.position(name)? + self.band_width() * 0.5)
    }
}

/// Round-stepped tick values over `[0, domain_max]`, at most roughly
/// `target` of them. Steps are 1, 2, or 5 times a power of ten, chosen the
/// way conventional chart axes do.
#[must_use]
pub fn linear_ticks(domain_max: f64, target: usize) -> Vec<f64> {
    if !domain_max.is_finite() || domain_max <= 0.0 || target == 0 {
        return Vec::new();
    }

    let raw_step = domain_max / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = if residual >= 7.07 {
        magnitude * 10.0
    } else if residual >= 3.16 {
        magnitude * 5.0
    } else if residual >= 1.41 {
        magnitude * 2.0
    } else {
        magnitude
    };

    let count = (domain_max / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}
