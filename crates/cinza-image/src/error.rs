/// An error type for the image and imgproc modules.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast the image data")]
    CastError,

    /// Error when the image sizes of two operands do not match.
    #[error("Image size mismatch ({0}x{1} vs {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the number of histogram bins is invalid.
    #[error("Invalid number of histogram bins: {0} (must be in 1..=256)")]
    InvalidHistogramBins(usize),

    /// Error when a filter kernel size is not a positive odd integer.
    #[error("Invalid kernel size: {0} (must be a positive odd integer)")]
    InvalidKernelSize(usize),

    /// Error when the image is smaller than the filter kernel radius.
    #[error("Image {0}x{1} is smaller than the kernel radius {2}")]
    ImageSmallerThanKernel(usize, usize, usize),

    /// Error when the gaussian noise variance is negative or not finite.
    #[error("Invalid noise variance: {0} (must be finite and >= 0)")]
    InvalidNoiseVariance(f32),

    /// Error when the contrast level makes the stretch factor diverge.
    #[error("Invalid contrast level: {0} (must be finite and != 259)")]
    InvalidContrastFactor(f32),
}
