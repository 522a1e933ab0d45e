use cinza_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

use super::{filter_2d, kernels};
use crate::padding::{spatial_padding, Padding2D, PaddingMode};

/// Blur an image using a 3x3 box blur filter.
///
/// Each output pixel is the uniform average of its 3x3 neighborhood, with
/// out-of-bounds samples reflected across the image edge
/// ([`PaddingMode::Reflect101`]).
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_blur(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    filter_2d(src, dst, &kernels::box_kernel3(), PaddingMode::Reflect101)
}

/// Blur an image using the fixed 3x3 gaussian blur filter.
///
/// Uses the binomial kernel `[[1, 2, 1], [2, 4, 2], [1, 2, 1]] / 16` with
/// reflected borders, like [`box_blur`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `_sigma` - Accepted for interface compatibility but has no effect; the
///   kernel above is always used.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    _sigma: f32,
) -> Result<(), ImageError> {
    filter_2d(src, dst, &kernels::gaussian_kernel3(), PaddingMode::Reflect101)
}

/// Blur an image using a median filter.
///
/// Each output pixel is the middle value of the sorted `kernel_size` x
/// `kernel_size` neighborhood. The border is synthesized with the given
/// policy; the denoising pipeline uses [`PaddingMode::Constant`], treating
/// out-of-bounds samples as intensity zero (note this differs from the
/// reflected border of the linear filters).
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `kernel_size` - The window size; must be a positive odd integer. A
///   window of 1 leaves the image unchanged.
/// * `border` - The border policy for out-of-bounds neighborhood samples.
///
/// # Errors
///
/// Returns an error if `kernel_size` is zero or even, if `src` and `dst`
/// sizes differ, or if either image dimension is smaller than the kernel
/// radius.
pub fn median_blur(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel_size: usize,
    border: PaddingMode,
) -> Result<(), ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let radius = kernel_size / 2;
    if src.rows() < radius || src.cols() < radius {
        return Err(ImageError::ImageSmallerThanKernel(
            src.cols(),
            src.rows(),
            radius,
        ));
    }

    if src.as_slice().is_empty() {
        return Ok(());
    }

    let mut padded = Image::<u8, 1>::from_size_val(
        ImageSize {
            width: src.width() + 2 * radius,
            height: src.height() + 2 * radius,
        },
        0,
    )?;
    spatial_padding(src, &mut padded, Padding2D::all(radius), border, [0])?;

    let cols = src.cols();
    let padded_cols = padded.cols();
    let padded_data = padded.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            let mut window = Vec::with_capacity(kernel_size * kernel_size);
            for (c, dst_pixel) in dst_row.iter_mut().enumerate() {
                window.clear();
                for dy in 0..kernel_size {
                    let row_start = (r + dy) * padded_cols + c;
                    window.extend_from_slice(&padded_data[row_start..row_start + kernel_size]);
                }
                window.sort_unstable();
                *dst_pixel = window[window.len() / 2];
            }
        });

    Ok(())
}
