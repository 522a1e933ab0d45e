#![deny(missing_docs)]
//! Grayscale image denoising pipeline in Rust

#[doc(inline)]
pub use cinza_image as image;

#[doc(inline)]
pub use cinza_imgproc as imgproc;
