//! Trajectory trait and concrete trajectory sources.
//!
//! Reconstructed tracks, simulated truth trajectories, and raw point lists
//! all reduce to the same capability for light-yield purposes: an ordered
//! sequence of positions. The hypothesis algorithm is written once against
//! [`Trajectory`]; each source is a thin adapter.

use crate::geometry::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of positions along a particle path.
pub trait Trajectory: Send + Sync {
    /// Number of trajectory points.
    fn num_points(&self) -> usize;

    /// Position of the point at `index`.
    ///
    /// Implementations may panic for `index >= num_points()`; callers
    /// iterate within bounds.
    fn point(&self, index: usize) -> Position;

    /// Number of elementary segments (adjacent point pairs).
    #[inline]
    fn num_segments(&self) -> usize {
        self.num_points().saturating_sub(1)
    }
}

impl Trajectory for [Position] {
    #[inline]
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn point(&self, index: usize) -> Position {
        self[index]
    }
}

impl Trajectory for Vec<Position> {
    #[inline]
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn point(&self, index: usize) -> Position {
        self[index]
    }
}

/// A reconstructed track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecoTrack {
    /// Track identifier assigned by reconstruction.
    pub id: u32,
    /// Ordered trajectory points.
    pub points: Vec<Position>,
}

impl RecoTrack {
    /// Creates a reconstructed track from its trajectory points.
    #[must_use]
    pub fn new(id: u32, points: Vec<Position>) -> Self {
        Self { id, points }
    }
}

impl Trajectory for RecoTrack {
    #[inline]
    fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn point(&self, index: usize) -> Position {
        self.points[index]
    }
}

/// A simulated truth trajectory.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McTrajectory {
    /// PDG code of the simulated particle.
    pub pdg_code: i32,
    /// Ordered trajectory points.
    pub points: Vec<Position>,
}

impl McTrajectory {
    /// Creates a truth trajectory for the given particle species.
    #[must_use]
    pub fn new(pdg_code: i32, points: Vec<Position>) -> Self {
        Self { pdg_code, points }
    }
}

impl Trajectory for McTrajectory {
    #[inline]
    fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn point(&self, index: usize) -> Position {
        self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Position> {
        vec![
            Position::new(0.0, 0.0, 0.0),
            Position::new(0.0, 0.0, 5.0),
            Position::new(0.0, 0.0, 10.0),
        ]
    }

    #[test]
    fn test_slice_trajectory() {
        let points = sample_points();
        let traj: &[Position] = &points;
        assert_eq!(traj.num_points(), 3);
        assert_eq!(traj.num_segments(), 2);
        assert_eq!(traj.point(2), Position::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_adapters_agree_with_raw_points() {
        let points = sample_points();
        let track = RecoTrack::new(7, points.clone());
        let mc = McTrajectory::new(13, points.clone());

        assert_eq!(track.num_points(), points.num_points());
        assert_eq!(mc.num_points(), points.num_points());
        for i in 0..points.len() {
            assert_eq!(track.point(i), points[i]);
            assert_eq!(mc.point(i), points[i]);
        }
    }

    #[test]
    fn test_num_segments_of_empty() {
        let traj: &[Position] = &[];
        assert_eq!(traj.num_segments(), 0);
    }
}
