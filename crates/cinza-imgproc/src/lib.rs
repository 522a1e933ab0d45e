#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// compute image histogram module.
pub mod histogram;

/// synthetic noise generation module.
pub mod noise;

/// spatial padding module.
pub mod padding;

/// module containing parallelization utilities.
pub mod parallel;

/// original/filtered comparison packaging module.
pub mod report;
