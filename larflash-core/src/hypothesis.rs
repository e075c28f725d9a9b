//! Flash hypothesis value types.
//!
//! A [`FlashHypothesis`] is the expected photo-electron count on each
//! optical detector for one light component. A
//! [`FlashHypothesisCollection`] bundles the prompt, late, and total
//! components for one trajectory.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Expected photo-electron counts per optical detector for one light component.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlashHypothesis {
    pe: Vec<f64>,
}

impl FlashHypothesis {
    /// Creates a zero-filled hypothesis for `num_detectors` detectors.
    #[must_use]
    pub fn zeros(num_detectors: usize) -> Self {
        Self {
            pe: vec![0.0; num_detectors],
        }
    }

    /// Creates a hypothesis from a per-detector photo-electron vector.
    #[must_use]
    pub fn from_pe(pe: Vec<f64>) -> Self {
        Self { pe }
    }

    /// Number of optical detectors covered by this hypothesis.
    #[inline]
    #[must_use]
    pub fn num_detectors(&self) -> usize {
        self.pe.len()
    }

    /// Returns true if the hypothesis covers no detectors.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pe.is_empty()
    }

    /// Expected photo-electron count on detector `detector`.
    #[inline]
    #[must_use]
    pub fn pe(&self, detector: usize) -> f64 {
        self.pe[detector]
    }

    /// Sets the photo-electron count on detector `detector`.
    #[inline]
    pub fn set_pe(&mut self, detector: usize, pe: f64) {
        self.pe[detector] = pe;
    }

    /// Per-detector counts as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.pe
    }

    /// Sum of the expected counts over all detectors.
    #[must_use]
    pub fn total_pe(&self) -> f64 {
        self.pe.iter().sum()
    }

    /// Adds another hypothesis into this one, detector by detector.
    ///
    /// # Errors
    /// Fails if the two hypotheses cover different detector counts.
    pub fn accumulate(&mut self, other: &Self) -> Result<()> {
        if self.pe.len() != other.pe.len() {
            return Err(Error::DetectorCountMismatch {
                left: self.pe.len(),
                right: other.pe.len(),
            });
        }
        for (a, b) in self.pe.iter_mut().zip(&other.pe) {
            *a += b;
        }
        Ok(())
    }

    /// Returns a copy with every detector count multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            pe: self.pe.iter().map(|v| v * factor).collect(),
        }
    }
}

/// Prompt, late, and total flash hypotheses for one trajectory.
///
/// Once finalized via [`set_prompt_and_fraction`](Self::set_prompt_and_fraction),
/// `total = prompt + late` holds on every detector.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlashHypothesisCollection {
    prompt: FlashHypothesis,
    late: FlashHypothesis,
    total: FlashHypothesis,
}

impl FlashHypothesisCollection {
    /// Creates a collection with all three components zero-filled.
    #[must_use]
    pub fn empty(num_detectors: usize) -> Self {
        Self {
            prompt: FlashHypothesis::zeros(num_detectors),
            late: FlashHypothesis::zeros(num_detectors),
            total: FlashHypothesis::zeros(num_detectors),
        }
    }

    /// Number of optical detectors covered by this collection.
    #[inline]
    #[must_use]
    pub fn num_detectors(&self) -> usize {
        self.prompt.num_detectors()
    }

    /// Prompt (fast) light component.
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &FlashHypothesis {
        &self.prompt
    }

    /// Late (slow) light component.
    #[inline]
    #[must_use]
    pub fn late(&self) -> &FlashHypothesis {
        &self.late
    }

    /// Total light, prompt plus late.
    #[inline]
    #[must_use]
    pub fn total(&self) -> &FlashHypothesis {
        &self.total
    }

    /// Elementwise sum of two collections.
    ///
    /// Commutative and associative, with [`empty`](Self::empty) as the
    /// identity.
    ///
    /// # Errors
    /// Fails if the two collections cover different detector counts.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        sum.prompt.accumulate(&other.prompt)?;
        sum.late.accumulate(&other.late)?;
        sum.total.accumulate(&other.total)?;
        Ok(sum)
    }

    /// Finalizes the collection from an accumulated prompt component.
    ///
    /// Sets the prompt component to `prompt` and derives
    /// `total = prompt / prompt_fraction` and `late = total - prompt`
    /// on every detector.
    ///
    /// # Errors
    /// Fails if `prompt_fraction` lies outside `(0, 1]` or if `prompt`
    /// covers a different detector count than this collection.
    pub fn set_prompt_and_fraction(
        &mut self,
        prompt: FlashHypothesis,
        prompt_fraction: f64,
    ) -> Result<()> {
        if !(prompt_fraction > 0.0 && prompt_fraction <= 1.0) {
            return Err(Error::InvalidPromptFraction(prompt_fraction));
        }
        if prompt.num_detectors() != self.num_detectors() {
            return Err(Error::DetectorCountMismatch {
                left: self.num_detectors(),
                right: prompt.num_detectors(),
            });
        }
        self.total = prompt.scaled(prompt_fraction.recip());
        self.late = FlashHypothesis::from_pe(
            self.total
                .as_slice()
                .iter()
                .zip(prompt.as_slice())
                .map(|(t, p)| t - p)
                .collect(),
        );
        self.prompt = prompt;
        Ok(())
    }
}
