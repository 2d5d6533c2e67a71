use serde::Serialize;

use super::generate::Dataset;
use super::mm_velocity;
use crate::options::FitGrid;

/// Best grid point found by [`fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    /// Fitted Michaelis constant.
    pub km: f64,
    /// Fitted maximum velocity.
    pub vmax: f64,
    /// Sum of squared residuals at the optimum.
    pub sse: f64,
    /// Root-mean-square residual, `sqrt(sse / n)`.
    pub rmse: f64,
}

impl FitResult {
    /// Relative Vmax error against the generating value, in percent.
    #[must_use]
    pub fn vmax_error_percent(&self, true_vmax: f64) -> f64 {
        if true_vmax == 0.0 {
            return 0.0;
        }
        (self.vmax - true_vmax).abs() / true_vmax.abs() * 100.0
    }
}

/// Exhaustive grid search for the (Km, Vmax) minimizing squared error.
///
/// Km is the outer loop and Vmax the inner, both ascending; the first
/// minimum encountered wins ties. Returns `None` for an empty dataset.
#[must_use]
pub fn fit(dataset: &Dataset, grid: &FitGrid) -> Option<FitResult> {
    if dataset.is_empty() {
        return None;
    }
    log::debug!(
        "fitting {} points over {} grid cells",
        dataset.len(),
        grid.size()
    );

    let mut best: Option<(f64, f64, f64)> = None;
    for km in grid.km_values() {
        for vmax in grid.vmax_values() {
            let sse: f64 = dataset
                .points
                .iter()
                .map(|p| {
                    let r = mm_velocity(p.s, vmax, km) - p.v;
                    r * r
                })
                .sum();
            if best.is_none_or(|(_, _, b)| sse < b) {
                best = Some((km, vmax, sse));
            }
        }
    }

    let (km, vmax, sse) = best?;
    let rmse = (sse / dataset.len() as f64).sqrt();
    log::info!("fit: Km = {km}, Vmax = {vmax}, RMSE = {rmse:.4}");
    Some(FitResult {
        km,
        vmax,
        sse,
        rmse,
    })
}

/// Fitted rate law sampled at `samples` evenly spaced points on
/// `[0, smax]`, for overlaying on the scatter plot.
#[must_use]
pub fn fitted_curve(
    result: &FitResult,
    smax: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    if samples < 2 {
        return vec![(0.0, 0.0)];
    }
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let s = smax * i as f64 / last;
            (s, mm_velocity(s, result.vmax, result.km))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::kinetics::generate::{generate, DataPoint};
    use crate::kinetics::KineticsParams;

    fn noiseless(vmax: f64, km: f64) -> Dataset {
        let params = KineticsParams {
            enzyme: 1.0,
            kcat: vmax,
            km,
            smax: 300.0,
            step: 10.0,
        };
        generate(&params, None, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn recovers_grid_point_exactly() {
        let result = fit(&noiseless(101.0, 50.0), &FitGrid::default()).unwrap();
        assert_eq!(result.km, 50.0);
        assert_eq!(result.vmax, 101.0);
        assert!(result.rmse < 1e-9);
        assert!(result.vmax_error_percent(101.0) < 1e-12);
    }

    #[test]
    fn off_grid_parameters_land_within_resolution() {
        let data = noiseless(100.0, 50.0);
        let result = fit(&data, &FitGrid::default()).unwrap();
        assert!((result.vmax - 100.0).abs() <= 5.0);
        assert!((result.km - 50.0).abs() <= 5.0);
        assert!(result.rmse < 1.0);
    }

    #[test]
    fn noisy_fit_is_close() {
        let params = KineticsParams {
            enzyme: 2.0,
            kcat: 150.0,
            km: 80.0,
            smax: 500.0,
            step: 10.0,
        };
        let data =
            generate(&params, Some(0.08), &mut StdRng::seed_from_u64(3));
        let result = fit(&data, &FitGrid::default()).unwrap();
        assert!(result.vmax_error_percent(300.0) < 15.0);
    }

    #[test]
    fn empty_dataset_has_no_fit() {
        let data = Dataset {
            points: Vec::new(),
            true_vmax: 1.0,
            true_km: 1.0,
        };
        assert!(fit(&data, &FitGrid::default()).is_none());
    }

    #[test]
    fn ties_keep_first_candidate() {
        // Only zero velocities: every Vmax candidate at any Km is penalized
        // equally at S = 0, so the very first grid point wins.
        let data = Dataset {
            points: vec![DataPoint { s: 0.0, v: 0.0 }],
            true_vmax: 0.0,
            true_km: 1.0,
        };
        let result = fit(&data, &FitGrid::default()).unwrap();
        assert_eq!((result.km, result.vmax), (1.0, 1.0));
        assert_eq!(result.sse, 0.0);
    }

    #[test]
    fn curve_spans_zero_to_smax() {
        let result = FitResult {
            km: 50.0,
            vmax: 100.0,
            sse: 0.0,
            rmse: 0.0,
        };
        let curve = fitted_curve(&result, 300.0, 61);
        assert_eq!(curve.len(), 61);
        assert_eq!(curve[0], (0.0, 0.0));
        let (s, v) = curve[60];
        assert_eq!(s, 300.0);
        assert!((v - 85.714_285_714).abs() < 1e-6);
    }
}
