//! Scintillation medium and optical detector properties.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scintillation light constants of the liquid-argon medium.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScintillationProperties {
    /// Total photon yield per MeV of deposited energy.
    pub photons_per_mev: f64,
    /// Fraction of the total light emitted promptly, in (0, 1].
    pub prompt_fraction: f64,
}

impl Default for ScintillationProperties {
    fn default() -> Self {
        Self {
            photons_per_mev: 24_000.0,
            prompt_fraction: 0.23,
        }
    }
}

impl ScintillationProperties {
    /// Creates properties with default liquid-argon constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total photon yield per MeV.
    #[must_use]
    pub fn with_photons_per_mev(mut self, photons_per_mev: f64) -> Self {
        self.photons_per_mev = photons_per_mev;
        self
    }

    /// Sets the prompt fraction.
    #[must_use]
    pub fn with_prompt_fraction(mut self, prompt_fraction: f64) -> Self {
        self.prompt_fraction = prompt_fraction;
        self
    }

    /// Prompt-only photon yield per MeV: total yield times prompt fraction.
    #[inline]
    #[must_use]
    pub fn prompt_yield_per_mev(&self) -> f64 {
        self.photons_per_mev * self.prompt_fraction
    }
}

/// Optical detector response properties.
///
/// Quantum efficiency is currently uniform across the array; the
/// per-detector broadcast keeps the vector form first-class for
/// calculators that accept non-uniform responses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpticalDetectorProperties {
    /// Fraction of arriving photons registered by a detector.
    pub quantum_efficiency: f64,
}

impl Default for OpticalDetectorProperties {
    fn default() -> Self {
        Self {
            quantum_efficiency: 0.02,
        }
    }
}

impl OpticalDetectorProperties {
    /// Creates properties with the default quantum efficiency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the uniform quantum efficiency.
    #[must_use]
    pub fn with_quantum_efficiency(mut self, quantum_efficiency: f64) -> Self {
        self.quantum_efficiency = quantum_efficiency;
        self
    }

    /// Per-detector quantum efficiency vector for `num_detectors` detectors.
    #[must_use]
    pub fn quantum_efficiencies(&self, num_detectors: usize) -> Vec<f64> {
        vec![self.quantum_efficiency; num_detectors]
    }
}
