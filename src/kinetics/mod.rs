//! Michaelis-Menten kinetics lab: synthetic data generation and
//! brute-force parameter fitting.
//!
//! v = Vmax * \[S\] / (Km + \[S\]), with Vmax = kcat * \[E\].
//!
//! Inputs arrive as loosely validated form fields; anything non-numeric or
//! outside its declared range falls back to that field's default instead
//! of failing. See [`KineticsParams::from_raw`].

mod fit;
mod generate;
mod lab;

pub use fit::{fit, fitted_curve, FitResult};
pub use generate::{generate, substrate_levels, DataPoint, Dataset};
pub use lab::KineticsLab;

use crate::options::{FieldRange, KineticsOptions};

/// Michaelis-Menten rate law.
///
/// Returns 0 for non-positive substrate concentration and when
/// `km + s` is not positive.
#[inline]
#[must_use]
pub fn mm_velocity(s: f64, vmax: f64, km: f64) -> f64 {
    if s <= 0.0 || km + s <= 0.0 {
        return 0.0;
    }
    vmax * s / (km + s)
}

/// Unvalidated form input, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKineticsInput {
    /// Enzyme concentration \[E\].
    pub enzyme: String,
    /// Turnover number kcat.
    pub kcat: String,
    /// Michaelis constant Km.
    pub km: String,
    /// Maximum substrate concentration.
    pub smax: String,
    /// Substrate step.
    pub step: String,
}

/// Validated generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticsParams {
    /// Enzyme concentration \[E\].
    pub enzyme: f64,
    /// Turnover number kcat.
    pub kcat: f64,
    /// Michaelis constant Km.
    pub km: f64,
    /// Maximum substrate concentration.
    pub smax: f64,
    /// Substrate step.
    pub step: f64,
}

impl KineticsParams {
    /// Defaults declared in `options`.
    #[must_use]
    pub fn defaults(options: &KineticsOptions) -> Self {
        Self {
            enzyme: options.enzyme.default,
            kcat: options.kcat.default,
            km: options.km.default,
            smax: options.smax.default,
            step: options.step.default,
        }
    }

    /// True Vmax = kcat * \[E\].
    #[must_use]
    pub fn vmax(&self) -> f64 {
        self.kcat * self.enzyme
    }

    /// Replace every non-finite or out-of-range field with its default.
    #[must_use]
    pub fn sanitize(self, options: &KineticsOptions) -> Self {
        Self {
            enzyme: checked("enzyme", self.enzyme, &options.enzyme),
            kcat: checked("kcat", self.kcat, &options.kcat),
            km: checked("km", self.km, &options.km),
            smax: checked("smax", self.smax, &options.smax),
            step: checked("step", self.step, &options.step),
        }
    }

    /// Parse and sanitize form input.
    #[must_use]
    pub fn from_raw(raw: &RawKineticsInput, options: &KineticsOptions) -> Self {
        Self {
            enzyme: parse("enzyme", &raw.enzyme, &options.enzyme),
            kcat: parse("kcat", &raw.kcat, &options.kcat),
            km: parse("km", &raw.km, &options.km),
            smax: parse("smax", &raw.smax, &options.smax),
            step: parse("step", &raw.step, &options.step),
        }
    }
}

fn parse(field: &str, text: &str, range: &FieldRange) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) => checked(field, value, range),
        Err(_) => {
            log::warn!(
                "{field}: '{text}' is not a number; using {}",
                range.default
            );
            range.default
        }
    }
}

fn checked(field: &str, value: f64, range: &FieldRange) -> f64 {
    if range.accepts(value) {
        value
    } else {
        log::warn!(
            "{field}: {value} outside [{}, {}]; using {}",
            range.min,
            range.max,
            range.default
        );
        range.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_vmax_at_km() {
        for (vmax, km) in [(100.0, 50.0), (1.0, 0.01), (730.0, 412.5)] {
            let v = mm_velocity(km, vmax, km);
            assert!((v - vmax / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn velocity_is_zero_without_substrate() {
        assert_eq!(mm_velocity(0.0, 100.0, 50.0), 0.0);
        assert_eq!(mm_velocity(-5.0, 100.0, 50.0), 0.0);
    }

    #[test]
    fn vanishing_denominator_gives_zero() {
        assert_eq!(mm_velocity(10.0, 100.0, -10.0), 0.0);
        assert_eq!(mm_velocity(10.0, 100.0, -20.0), 0.0);
        assert!(mm_velocity(10.0, 100.0, -5.0).is_finite());
    }

    #[test]
    fn raw_input_falls_back_per_field() {
        let options = KineticsOptions::default();
        let raw = RawKineticsInput {
            enzyme: "2".to_owned(),
            kcat: "abc".to_owned(),
            km: "-4".to_owned(),
            smax: " 250 ".to_owned(),
            step: "NaN".to_owned(),
        };
        let params = KineticsParams::from_raw(&raw, &options);
        assert_eq!(params.enzyme, 2.0);
        assert_eq!(params.kcat, 100.0);
        assert_eq!(params.km, 50.0);
        assert_eq!(params.smax, 250.0);
        assert_eq!(params.step, 10.0);
        assert_eq!(params.vmax(), 200.0);
    }

    #[test]
    fn sanitize_rejects_non_finite_and_out_of_range() {
        let options = KineticsOptions::default();
        let params = KineticsParams {
            enzyme: f64::INFINITY,
            kcat: 5000.0,
            km: 20.0,
            smax: 0.0,
            step: 5.0,
        }
        .sanitize(&options);
        assert_eq!(params.enzyme, 1.0);
        assert_eq!(params.kcat, 100.0);
        assert_eq!(params.km, 20.0);
        assert_eq!(params.smax, 300.0);
        assert_eq!(params.step, 5.0);
    }
}
