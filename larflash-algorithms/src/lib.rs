//! larflash-algorithms: Flash hypothesis construction.
//!
//! This crate turns a trajectory and its energy-loss profile into a
//! per-detector light hypothesis:
//! - **`PhotonYieldCalculator`** - expected prompt light from one segment
//! - **`FlashHypothesisCreator`** - segmentation, accumulation, and
//!   prompt/late finalization over a whole trajectory
//!
#![warn(missing_docs)]

mod creator;
mod light_yield;

pub use creator::{FlashHypothesisCreator, YieldContext};
pub use light_yield::PhotonYieldCalculator;

// Re-export core types used throughout the public API
pub use larflash_core::{Error, FlashHypothesis, FlashHypothesisCollection, Result};
