use rand::Rng;

use super::fit::{fit, FitResult};
use super::generate::{generate, Dataset};
use super::{KineticsParams, RawKineticsInput};
use crate::options::KineticsOptions;

/// State behind the kinetics page: current parameters, the last generated
/// dataset, and the fit made against it (if any).
#[derive(Debug, Clone)]
pub struct KineticsLab {
    options: KineticsOptions,
    params: KineticsParams,
    noise_enabled: bool,
    dataset: Option<Dataset>,
    fit: Option<FitResult>,
}

impl KineticsLab {
    /// Lab with default parameters, noise on, and no data.
    #[must_use]
    pub fn new(options: KineticsOptions) -> Self {
        Self {
            params: KineticsParams::defaults(&options),
            options,
            noise_enabled: true,
            dataset: None,
            fit: None,
        }
    }

    /// Current (sanitized) parameters.
    #[must_use]
    pub fn params(&self) -> &KineticsParams {
        &self.params
    }

    /// Replace parameters, sanitizing each field.
    pub fn set_params(&mut self, params: KineticsParams) {
        self.params = params.sanitize(&self.options);
    }

    /// Replace parameters from raw form input.
    pub fn set_raw(&mut self, raw: &RawKineticsInput) {
        self.params = KineticsParams::from_raw(raw, &self.options);
    }

    /// Whether generated data gets multiplicative noise.
    #[must_use]
    pub fn noise_enabled(&self) -> bool {
        self.noise_enabled
    }

    /// Toggle noise for the next generation.
    pub fn set_noise_enabled(&mut self, enabled: bool) {
        self.noise_enabled = enabled;
    }

    /// Regenerate the dataset, discarding any previous data and fit.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Dataset {
        let noise = self.noise_enabled.then_some(self.options.noise_fraction);
        self.fit = None;
        self.dataset.insert(generate(&self.params, noise, rng))
    }

    /// Whether there is data to fit.
    #[must_use]
    pub fn can_fit(&self) -> bool {
        self.dataset.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Fit the current dataset. No-op returning `None` without data.
    pub fn fit(&mut self) -> Option<FitResult> {
        let result = fit(self.dataset.as_ref()?, &self.options.grid)?;
        self.fit = Some(result);
        Some(result)
    }

    /// Last generated dataset.
    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Fit for the current dataset, if one was made.
    #[must_use]
    pub fn fit_result(&self) -> Option<&FitResult> {
        self.fit.as_ref()
    }
}

impl Default for KineticsLab {
    fn default() -> Self {
        Self::new(KineticsOptions::default())
    }
}
