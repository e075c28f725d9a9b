//! Whole-trajectory flash hypothesis construction.

use rayon::prelude::*;

use larflash_core::{
    Error, FlashHypothesis, FlashHypothesisCollection, OpticalGeometry, Position, Result,
    ScintillationProperties, Trajectory, VisibilityService,
};

use crate::light_yield::PhotonYieldCalculator;

/// Read-only services and constants for one hypothesis request.
///
/// Every field is borrowed for the duration of a single call; nothing
/// here is mutated, so one context can serve concurrent requests.
pub struct YieldContext<'a, V: VisibilityService> {
    /// Optical detector geometry.
    pub geometry: &'a OpticalGeometry,
    /// Precomputed photon visibility lookup.
    pub visibility: &'a V,
    /// Scintillation constants of the medium.
    pub scintillation: &'a ScintillationProperties,
    /// Per-detector quantum efficiency, one entry per detector.
    pub quantum_efficiency: &'a [f64],
    /// Drift-axis correction added to every sampled midpoint.
    pub drift_offset: f64,
}

/// How an energy-loss profile maps onto trajectory segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DedxSampling {
    /// One value per trajectory point; segment values are endpoint means.
    PointSampled,
    /// One value per segment, already averaged.
    SegmentAveraged,
}

fn resolve_sampling(points: usize, profile: usize) -> Result<DedxSampling> {
    if profile == points {
        Ok(DedxSampling::PointSampled)
    } else if profile + 1 == points {
        Ok(DedxSampling::SegmentAveraged)
    } else {
        Err(Error::ProfileShape { points, profile })
    }
}

fn segment_dedx(profile: &[f64], segment: usize, sampling: DedxSampling) -> f64 {
    match sampling {
        DedxSampling::PointSampled => 0.5 * (profile[segment - 1] + profile[segment]),
        DedxSampling::SegmentAveraged => profile[segment - 1],
    }
}

/// Builds a finalized [`FlashHypothesisCollection`] for a trajectory.
///
/// The trajectory is split into adjacent-point segments; each segment's
/// prompt light is computed from its drift-corrected midpoint visibility
/// and accumulated, and the sum is split into prompt/late/total components
/// with the medium's prompt fraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashHypothesisCreator {
    calc: PhotonYieldCalculator,
}

impl FlashHypothesisCreator {
    /// Creates a hypothesis creator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: PhotonYieldCalculator::new(),
        }
    }

    /// Builds the hypothesis for a whole trajectory.
    ///
    /// `dedx` carries either one value per trajectory point (endpoint
    /// means are used per segment) or one value per segment.
    ///
    /// # Errors
    /// Fails before any accumulation if the profile length matches
    /// neither form, or if the context's quantum-efficiency vector does
    /// not cover the detector count.
    pub fn hypothesis<T, V>(
        &self,
        trajectory: &T,
        dedx: &[f64],
        context: &YieldContext<'_, V>,
    ) -> Result<FlashHypothesisCollection>
    where
        T: Trajectory + ?Sized,
        V: VisibilityService,
    {
        let sampling = resolve_sampling(trajectory.num_points(), dedx.len())?;
        let num_detectors = Self::validate_context(context)?;

        let mut prompt = FlashHypothesis::zeros(num_detectors);
        for segment in 1..trajectory.num_points() {
            let p1 = trajectory.point(segment - 1);
            let p2 = trajectory.point(segment);
            let contribution = self.segment_prompt(
                &p1,
                &p2,
                segment_dedx(dedx, segment, sampling),
                context,
                num_detectors,
            )?;
            prompt.accumulate(&contribution)?;
        }
        Self::finalized(prompt, context)
    }

    /// Builds the hypothesis for a whole trajectory, fanning segments out
    /// over the rayon thread pool.
    ///
    /// Agrees with [`hypothesis`](Self::hypothesis) up to floating-point
    /// summation order.
    ///
    /// # Errors
    /// Same conditions as [`hypothesis`](Self::hypothesis).
    pub fn par_hypothesis<T, V>(
        &self,
        trajectory: &T,
        dedx: &[f64],
        context: &YieldContext<'_, V>,
    ) -> Result<FlashHypothesisCollection>
    where
        T: Trajectory + ?Sized,
        V: VisibilityService,
    {
        let sampling = resolve_sampling(trajectory.num_points(), dedx.len())?;
        let num_detectors = Self::validate_context(context)?;

        let segments: Vec<(Position, Position, f64)> = (1..trajectory.num_points())
            .map(|s| {
                (
                    trajectory.point(s - 1),
                    trajectory.point(s),
                    segment_dedx(dedx, s, sampling),
                )
            })
            .collect();

        let prompt = segments
            .into_par_iter()
            .map(|(p1, p2, dedx)| self.segment_prompt(&p1, &p2, dedx, context, num_detectors))
            .try_reduce(
                || FlashHypothesis::zeros(num_detectors),
                |mut acc, contribution| {
                    acc.accumulate(&contribution)?;
                    Ok(acc)
                },
            )?;
        Self::finalized(prompt, context)
    }

    /// Builds the hypothesis for a single segment.
    ///
    /// Produces the same collection as [`hypothesis`](Self::hypothesis)
    /// invoked on the two endpoints.
    ///
    /// # Errors
    /// Fails if the context's quantum-efficiency vector does not cover
    /// the detector count.
    pub fn segment_hypothesis<V>(
        &self,
        p1: &Position,
        p2: &Position,
        dedx: f64,
        context: &YieldContext<'_, V>,
    ) -> Result<FlashHypothesisCollection>
    where
        V: VisibilityService,
    {
        let num_detectors = Self::validate_context(context)?;
        let prompt = self.segment_prompt(p1, p2, dedx, context, num_detectors)?;
        Self::finalized(prompt, context)
    }

    fn validate_context<V: VisibilityService>(context: &YieldContext<'_, V>) -> Result<usize> {
        let num_detectors = context.geometry.num_detectors();
        if context.quantum_efficiency.len() != num_detectors {
            return Err(Error::DetectorCountMismatch {
                left: num_detectors,
                right: context.quantum_efficiency.len(),
            });
        }
        Ok(num_detectors)
    }

    fn segment_prompt<V: VisibilityService>(
        &self,
        p1: &Position,
        p2: &Position,
        dedx: f64,
        context: &YieldContext<'_, V>,
        num_detectors: usize,
    ) -> Result<FlashHypothesis> {
        let mut hypothesis = FlashHypothesis::zeros(num_detectors);

        let midpoint = self.calc.segment_midpoint(p1, p2, context.drift_offset);
        let Some(visibility) = context.visibility.lookup(&midpoint) else {
            return Ok(hypothesis);
        };
        // A wrong-width answer marks a point outside the tabulated domain.
        if visibility.len() != num_detectors {
            return Ok(hypothesis);
        }

        self.calc.fill_prompt_hypothesis(
            context.scintillation.prompt_yield_per_mev(),
            dedx,
            p1,
            p2,
            context.quantum_efficiency,
            visibility,
            &mut hypothesis,
        )?;
        Ok(hypothesis)
    }

    fn finalized<V: VisibilityService>(
        prompt: FlashHypothesis,
        context: &YieldContext<'_, V>,
    ) -> Result<FlashHypothesisCollection> {
        let mut collection = FlashHypothesisCollection::empty(prompt.num_detectors());
        collection.set_prompt_and_fraction(prompt, context.scintillation.prompt_fraction)?;
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sampling() {
        assert_eq!(resolve_sampling(5, 5).unwrap(), DedxSampling::PointSampled);
        assert_eq!(
            resolve_sampling(5, 4).unwrap(),
            DedxSampling::SegmentAveraged
        );
        assert!(matches!(
            resolve_sampling(5, 3),
            Err(Error::ProfileShape {
                points: 5,
                profile: 3
            })
        ));
        assert!(matches!(
            resolve_sampling(5, 6),
            Err(Error::ProfileShape { .. })
        ));
    }

    #[test]
    fn test_segment_dedx_interpolation() {
        let profile = [1.0, 3.0, 5.0];
        assert!(
            (segment_dedx(&profile, 1, DedxSampling::PointSampled) - 2.0).abs() < f64::EPSILON
        );
        assert!(
            (segment_dedx(&profile, 2, DedxSampling::PointSampled) - 4.0).abs() < f64::EPSILON
        );
        assert!(
            (segment_dedx(&profile, 1, DedxSampling::SegmentAveraged) - 1.0).abs() < f64::EPSILON
        );
    }
}
