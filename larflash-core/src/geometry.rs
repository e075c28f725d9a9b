//! Detector coordinates and optical detector geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D point in detector coordinates (cm).
///
/// The x axis is the drift axis; drift-time corrections move points along
/// it before any visibility lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Drift-axis coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Beam-axis coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Midpoint between this position and another.
    #[inline]
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
            z: 0.5 * (self.z + other.z),
        }
    }

    /// Returns this position shifted along the drift axis.
    #[inline]
    #[must_use]
    pub fn with_drift_offset(&self, offset: f64) -> Self {
        Self {
            x: self.x + offset,
            ..*self
        }
    }
}

/// Optical detector geometry descriptor.
///
/// Detector identity is a stable index in `0..num_detectors()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpticalGeometry {
    num_detectors: usize,
}

impl OpticalGeometry {
    /// Creates a geometry with the given number of optical detectors.
    #[inline]
    #[must_use]
    pub fn new(num_detectors: usize) -> Self {
        Self { num_detectors }
    }

    /// Number of optical detectors in the array.
    #[inline]
    #[must_use]
    pub fn num_detectors(&self) -> usize {
        self.num_detectors
    }
}
