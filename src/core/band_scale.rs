use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::types::Bin;
use crate::error::{ChartError, ChartResult};

/// Fraction of each step left empty between neighbouring bands.
pub const DEFAULT_BAND_PADDING: f64 = 0.1;

/// Ordinal scale that maps each distinct bin onto a rounded horizontal band.
///
/// The domain keeps first-occurrence order. Outer padding equals the inner
/// padding, and pixels lost to rounding are split evenly on both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexSet<Bin>,
    range_start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<'a>(
        bins: impl IntoIterator<Item = &'a Bin>,
        range_width: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        if !range_width.is_finite() || range_width < 0.0 {
            return Err(ChartError::InvalidData(
                "band range width must be finite and >= 0".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let domain: IndexSet<Bin> = bins.into_iter().cloned().collect();
        if domain.is_empty() {
            return Ok(Self {
                domain,
                range_start: 0.0,
                step: 0.0,
                bandwidth: 0.0,
            });
        }

        let count = domain.len() as f64;
        let step = (range_width / (count - padding + 2.0 * padding)).floor();
        let error = range_width - (count - padding) * step;
        Ok(Self {
            domain,
            range_start: (error / 2.0).round(),
            step,
            bandwidth: (step * (1.0 - padding)).round(),
        })
    }

    /// Left edge of the band assigned to `bin`, or `None` outside the domain.
    #[must_use]
    pub fn position(&self, bin: &Bin) -> Option<f64> {
        self.domain
            .get_index_of(bin)
            .map(|index| self.range_start + self.step * index as f64)
    }

    #[must_use]
    pub fn center(&self, bin: &Bin) -> Option<f64> {
        self.position(bin).map(|left| left + self.bandwidth / 2.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> impl Iterator<Item = &Bin> {
        self.domain.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}
