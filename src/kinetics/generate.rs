use rand::Rng;
use serde::Serialize;

use super::{mm_velocity, KineticsParams};

/// One (substrate, velocity) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    /// Substrate concentration.
    pub s: f64,
    /// Observed initial velocity.
    pub v: f64,
}

/// Generated samples plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Samples in ascending substrate order.
    pub points: Vec<DataPoint>,
    /// Vmax used for generation.
    pub true_vmax: f64,
    /// Km used for generation.
    pub true_km: f64,
}

impl Dataset {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Double-reciprocal (1/S, 1/v) series, skipping zero samples.
    #[must_use]
    pub fn lineweaver_burk(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.s > 0.0 && p.v > 0.0)
            .map(|p| (1.0 / p.s, 1.0 / p.v))
            .collect()
    }
}

/// Substrate levels `0, step, 2*step, ...` through `smax`.
///
/// When `smax` is not a multiple of `step` the last level is the first
/// multiple beyond it. A non-positive `step` yields just `[0]`.
#[must_use]
pub fn substrate_levels(smax: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() || !smax.is_finite() {
        return vec![0.0];
    }
    let last = (smax.max(0.0) / step - 1e-9).ceil().max(0.0) as usize;
    (0..=last).map(|i| i as f64 * step).collect()
}

/// Sample the rate law over `substrate_levels(params.smax, params.step)`.
///
/// With `noise = Some(f)` each velocity is scaled by a uniform factor in
/// `[1 - f, 1 + f]` and clamped at zero.
pub fn generate<R: Rng + ?Sized>(
    params: &KineticsParams,
    noise: Option<f64>,
    rng: &mut R,
) -> Dataset {
    let vmax = params.vmax();
    let amplitude = noise.map_or(0.0, f64::abs);
    let points = substrate_levels(params.smax, params.step)
        .into_iter()
        .map(|s| {
            let mut v = mm_velocity(s, vmax, params.km);
            if amplitude > 0.0 {
                v += v * rng.random_range(-amplitude..=amplitude);
            }
            DataPoint { s, v: v.max(0.0) }
        })
        .collect();
    Dataset {
        points,
        true_vmax: vmax,
        true_km: params.km,
    }
}
