//! Filter operations
//!
//! This module provides spatial filter operations for image denoising.

/// Filter kernels
pub mod kernels;

/// 2D convolution operations
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
