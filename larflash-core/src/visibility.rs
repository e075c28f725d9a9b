//! Photon visibility service trait and voxel table implementation.
//!
//! Visibility is the fraction of photons emitted at a point that reach
//! each optical detector, precomputed and tabulated over the detector
//! volume. Points outside the tabulated domain have no visibility entry;
//! callers treat such lookups as zero light, not as errors.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::geometry::Position;

/// Read-only per-detector visibility lookup.
pub trait VisibilityService: Send + Sync {
    /// Number of optical detectors covered by each visibility vector.
    fn num_detectors(&self) -> usize;

    /// Visibility fractions at `position`, one per detector, or `None`
    /// if the position lies outside the tabulated domain.
    fn lookup(&self, position: &Position) -> Option<&[f64]>;
}

/// Visibility table on a regular voxel grid.
///
/// The detector volume between `lower` and `upper` is divided into
/// `shape[0] * shape[1] * shape[2]` voxels; each voxel stores one
/// visibility fraction per optical detector. Lookups outside the
/// bounding box return `None`.
#[derive(Debug, Clone)]
pub struct VoxelVisibilityTable {
    lower: Position,
    upper: Position,
    shape: [usize; 3],
    visibilities: Array2<f64>,
}

impl VoxelVisibilityTable {
    /// Creates a zero-filled table over the given bounding box.
    ///
    /// # Errors
    /// Fails if the bounding box is degenerate or any axis has zero voxels.
    pub fn zeros(
        lower: Position,
        upper: Position,
        shape: [usize; 3],
        num_detectors: usize,
    ) -> Result<Self> {
        let num_voxels = Self::validate_grid(&lower, &upper, shape)?;
        Ok(Self {
            lower,
            upper,
            shape,
            visibilities: Array2::zeros((num_voxels, num_detectors)),
        })
    }

    /// Creates a table from a precomputed (voxel x detector) matrix.
    ///
    /// Rows are indexed by flattened voxel index (x-major, then y, then z).
    ///
    /// # Errors
    /// Fails if the grid is degenerate, the row count does not match the
    /// voxel count, or any visibility fraction lies outside `[0, 1]`.
    pub fn from_table(
        lower: Position,
        upper: Position,
        shape: [usize; 3],
        visibilities: Array2<f64>,
    ) -> Result<Self> {
        let num_voxels = Self::validate_grid(&lower, &upper, shape)?;
        if visibilities.nrows() != num_voxels {
            return Err(Error::Config(format!(
                "visibility table has {} rows for {} voxels",
                visibilities.nrows(),
                num_voxels
            )));
        }
        if let Some(bad) = visibilities.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::Config(format!(
                "visibility fraction {bad} outside [0, 1]"
            )));
        }
        Ok(Self {
            lower,
            upper,
            shape,
            visibilities,
        })
    }

    fn validate_grid(lower: &Position, upper: &Position, shape: [usize; 3]) -> Result<usize> {
        if !(lower.x < upper.x && lower.y < upper.y && lower.z < upper.z) {
            return Err(Error::Config(format!(
                "degenerate visibility bounding box: ({}, {}, {}) to ({}, {}, {})",
                lower.x, lower.y, lower.z, upper.x, upper.y, upper.z
            )));
        }
        if shape.contains(&0) {
            return Err(Error::Config(format!(
                "visibility grid shape {shape:?} has an empty axis"
            )));
        }
        Ok(shape[0] * shape[1] * shape[2])
    }

    /// Number of voxels in the grid.
    #[must_use]
    pub fn num_voxels(&self) -> usize {
        self.visibilities.nrows()
    }

    /// Stores the visibility vector for the voxel at grid indices
    /// `(ix, iy, iz)`.
    ///
    /// # Errors
    /// Fails if the indices fall outside the grid or the vector length
    /// does not match the detector count.
    pub fn set_voxel(&mut self, ix: usize, iy: usize, iz: usize, values: &[f64]) -> Result<()> {
        if ix >= self.shape[0] || iy >= self.shape[1] || iz >= self.shape[2] {
            return Err(Error::Config(format!(
                "voxel ({ix}, {iy}, {iz}) outside grid {:?}",
                self.shape
            )));
        }
        if values.len() != self.visibilities.ncols() {
            return Err(Error::DetectorCountMismatch {
                left: self.visibilities.ncols(),
                right: values.len(),
            });
        }
        let voxel = self.flat_index(ix, iy, iz);
        for (slot, value) in self.visibilities.row_mut(voxel).iter_mut().zip(values) {
            *slot = *value;
        }
        Ok(())
    }

    #[inline]
    fn flat_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        (ix * self.shape[1] + iy) * self.shape[2] + iz
    }

    /// Voxel index containing `position`, or `None` outside the box.
    fn voxel_of(&self, position: &Position) -> Option<usize> {
        let ix = Self::axis_index(position.x, self.lower.x, self.upper.x, self.shape[0])?;
        let iy = Self::axis_index(position.y, self.lower.y, self.upper.y, self.shape[1])?;
        let iz = Self::axis_index(position.z, self.lower.z, self.upper.z, self.shape[2])?;
        Some(self.flat_index(ix, iy, iz))
    }

    fn axis_index(coordinate: f64, lower: f64, upper: f64, bins: usize) -> Option<usize> {
        if !(lower..upper).contains(&coordinate) {
            return None;
        }
        let fraction = (coordinate - lower) / (upper - lower);
        // Guard against rounding up to `bins` just below the upper bound.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (fraction * bins as f64) as usize;
        Some(index.min(bins - 1))
    }
}

impl VisibilityService for VoxelVisibilityTable {
    #[inline]
    fn num_detectors(&self) -> usize {
        self.visibilities.ncols()
    }

    fn lookup(&self, position: &Position) -> Option<&[f64]> {
        let voxel = self.voxel_of(position)?;
        self.visibilities.row(voxel).to_slice()
    }
}
