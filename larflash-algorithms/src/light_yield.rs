//! Per-segment prompt light yield.

use larflash_core::{Error, FlashHypothesis, Position, Result};

/// Converts one trajectory segment into expected prompt light per detector.
///
/// The expected count on detector `d` is the product of the prompt photon
/// yield per MeV, the energy deposited over the segment (dE/dx times
/// segment length), the detector's quantum efficiency, and the visibility
/// of the sampling point from the detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhotonYieldCalculator;

impl PhotonYieldCalculator {
    /// Creates a calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sampling point for a segment: its midpoint, shifted along the
    /// drift axis by `drift_offset` before any visibility lookup.
    #[inline]
    #[must_use]
    pub fn segment_midpoint(&self, p1: &Position, p2: &Position, drift_offset: f64) -> Position {
        p1.midpoint(p2).with_drift_offset(drift_offset)
    }

    /// Fills `hypothesis` with the expected prompt light from one segment.
    ///
    /// `prompt_yield_per_mev` is the prompt-only photon yield per unit
    /// energy (total yield times prompt fraction). A degenerate segment
    /// (`p1 == p2`) deposits no energy and fills zeros.
    ///
    /// # Errors
    /// Fails if `quantum_efficiency`, `visibility`, and `hypothesis`
    /// disagree on the detector count.
    pub fn fill_prompt_hypothesis(
        &self,
        prompt_yield_per_mev: f64,
        dedx: f64,
        p1: &Position,
        p2: &Position,
        quantum_efficiency: &[f64],
        visibility: &[f64],
        hypothesis: &mut FlashHypothesis,
    ) -> Result<()> {
        let num_detectors = hypothesis.num_detectors();
        if quantum_efficiency.len() != num_detectors {
            return Err(Error::DetectorCountMismatch {
                left: num_detectors,
                right: quantum_efficiency.len(),
            });
        }
        if visibility.len() != num_detectors {
            return Err(Error::DetectorCountMismatch {
                left: num_detectors,
                right: visibility.len(),
            });
        }

        let photons = prompt_yield_per_mev * dedx * p1.distance(p2);
        for detector in 0..num_detectors {
            hypothesis.set_pe(
                detector,
                photons * quantum_efficiency[detector] * visibility[detector],
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint_offset_applied_to_drift_axis() {
        let calc = PhotonYieldCalculator::new();
        let mid = calc.segment_midpoint(
            &Position::new(0.0, 0.0, 0.0),
            &Position::new(2.0, 4.0, 6.0),
            10.0,
        );
        assert_relative_eq!(mid.x, 11.0);
        assert_relative_eq!(mid.y, 2.0);
        assert_relative_eq!(mid.z, 3.0);
    }

    #[test]
    fn test_fill_prompt_hypothesis() {
        let calc = PhotonYieldCalculator::new();
        let mut hyp = FlashHypothesis::zeros(2);
        calc.fill_prompt_hypothesis(
            5520.0,
            2.0,
            &Position::new(0.0, 0.0, 0.0),
            &Position::new(0.0, 0.0, 10.0),
            &[0.02, 0.01],
            &[0.001, 0.002],
            &mut hyp,
        )
        .unwrap();

        // 5520 * 2 * 10 = 110400 prompt photons over the segment
        assert_relative_eq!(hyp.pe(0), 110_400.0 * 0.02 * 0.001, max_relative = 1e-12);
        assert_relative_eq!(hyp.pe(1), 110_400.0 * 0.01 * 0.002, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_segment_fills_zeros() {
        let calc = PhotonYieldCalculator::new();
        let point = Position::new(1.0, 2.0, 3.0);
        let mut hyp = FlashHypothesis::from_pe(vec![9.0, 9.0]);
        calc.fill_prompt_hypothesis(5520.0, 2.0, &point, &point, &[0.02; 2], &[0.5; 2], &mut hyp)
            .unwrap();
        assert_relative_eq!(hyp.pe(0), 0.0);
        assert_relative_eq!(hyp.pe(1), 0.0);
    }

    #[test]
    fn test_detector_count_mismatch() {
        let calc = PhotonYieldCalculator::new();
        let mut hyp = FlashHypothesis::zeros(2);
        let result = calc.fill_prompt_hypothesis(
            5520.0,
            2.0,
            &Position::new(0.0, 0.0, 0.0),
            &Position::new(0.0, 0.0, 1.0),
            &[0.02; 3],
            &[0.001; 2],
            &mut hyp,
        );
        assert!(matches!(result, Err(Error::DetectorCountMismatch { .. })));
    }
}
