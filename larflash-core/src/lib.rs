//! larflash-core: Core types and traits for optical flash hypothesis construction.
//!
//! This crate provides the foundational abstractions for predicting the
//! scintillation light a charged-particle trajectory produces on an array
//! of optical detectors: positions and trajectories, per-detector flash
//! hypotheses, detector and medium properties, and the visibility service.
//!

pub mod error;
pub mod geometry;
pub mod hypothesis;
pub mod properties;
pub mod trajectory;
pub mod visibility;

pub use error::{Error, Result};
pub use geometry::{OpticalGeometry, Position};
pub use hypothesis::{FlashHypothesis, FlashHypothesisCollection};
pub use properties::{OpticalDetectorProperties, ScintillationProperties};
pub use trajectory::{McTrajectory, RecoTrack, Trajectory};
pub use visibility::{VisibilityService, VoxelVisibilityTable};
