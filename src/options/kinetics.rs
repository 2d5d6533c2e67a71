use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive numeric range with a fallback used when input is rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FieldRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Value substituted for missing or invalid input.
    pub default: f64,
}

impl FieldRange {
    /// Range `[min, max]` with fallback `default`.
    #[must_use]
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Whether `value` is finite and inside the range.
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Grid the brute-force fitter searches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FitGrid {
    /// Smallest Km candidate.
    pub km_min: f64,
    /// Largest Km candidate (inclusive).
    pub km_max: f64,
    /// Km increment.
    pub km_step: f64,
    /// Smallest Vmax candidate.
    pub vmax_min: f64,
    /// Largest Vmax candidate (inclusive).
    pub vmax_max: f64,
    /// Vmax increment.
    pub vmax_step: f64,
}

impl Default for FitGrid {
    fn default() -> Self {
        Self {
            km_min: 1.0,
            km_max: 500.0,
            km_step: 1.0,
            vmax_min: 1.0,
            vmax_max: 1000.0,
            vmax_step: 5.0,
        }
    }
}

impl FitGrid {
    /// Km candidates in ascending order.
    pub fn km_values(&self) -> impl Iterator<Item = f64> {
        axis(self.km_min, self.km_max, self.km_step)
    }

    /// Vmax candidates in ascending order.
    pub fn vmax_values(&self) -> impl Iterator<Item = f64> {
        axis(self.vmax_min, self.vmax_max, self.vmax_step)
    }

    /// Number of (Km, Vmax) pairs evaluated per fit.
    #[must_use]
    pub fn size(&self) -> usize {
        self.km_values().count() * self.vmax_values().count()
    }
}

/// `min, min + step, ...` up to `max`, computed by index to avoid drift.
fn axis(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && max >= min {
        ((max - min) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| min + i as f64 * step)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Kinetics", inline)]
#[serde(default)]
/// Input ranges, noise level and fit grid for the kinetics lab.
pub struct KineticsOptions {
    /// Multiplicative noise amplitude (0.08 = ±8%).
    #[schemars(title = "Noise", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub noise_fraction: f64,
    /// Enzyme concentration range.
    #[schemars(skip)]
    pub enzyme: FieldRange,
    /// Turnover number range.
    #[schemars(skip)]
    pub kcat: FieldRange,
    /// Michaelis constant range.
    #[schemars(skip)]
    pub km: FieldRange,
    /// Maximum substrate concentration range.
    #[schemars(skip)]
    pub smax: FieldRange,
    /// Substrate step range.
    #[schemars(skip)]
    pub step: FieldRange,
    /// Fit search grid.
    #[schemars(skip)]
    pub grid: FitGrid,
}

impl Default for KineticsOptions {
    fn default() -> Self {
        Self {
            noise_fraction: 0.08,
            enzyme: FieldRange::new(0.1, 10.0, 1.0),
            kcat: FieldRange::new(1.0, 1000.0, 100.0),
            km: FieldRange::new(1.0, 500.0, 50.0),
            smax: FieldRange::new(10.0, 1000.0, 300.0),
            step: FieldRange::new(1.0, 100.0, 10.0),
            grid: FitGrid::default(),
        }
    }
}
