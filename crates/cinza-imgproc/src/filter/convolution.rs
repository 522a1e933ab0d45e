use cinza_image::{Image, ImageError};
use rayon::prelude::*;

use crate::padding::PaddingMode;

/// Apply a 3x3 kernel to an image with the given border policy.
///
/// Out-of-bounds reads are resolved per axis with [`PaddingMode::map_index`];
/// with [`PaddingMode::Constant`] the out-of-bounds taps contribute zero.
/// The weighted sum is clamped to `[0, 255]` and truncated to `u8`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `kernel` - The 3x3 kernel weights.
/// * `border` - The border policy for out-of-bounds neighborhood samples.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes differ, or if either image
/// dimension is smaller than the kernel radius.
pub fn filter_2d(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &[[f32; 3]; 3],
    border: PaddingMode,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let radius = 1;
    if src.rows() < radius || src.cols() < radius {
        return Err(ImageError::ImageSmallerThanKernel(
            src.cols(),
            src.rows(),
            radius,
        ));
    }

    let (rows, cols) = (src.rows(), src.cols());
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            for (c, dst_pixel) in dst_row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for (ky, kernel_row) in kernel.iter().enumerate() {
                    let y = r as isize + ky as isize - 1;
                    for (kx, &weight) in kernel_row.iter().enumerate() {
                        let x = c as isize + kx as isize - 1;
                        let in_bounds =
                            y >= 0 && y < rows as isize && x >= 0 && x < cols as isize;
                        let val = if in_bounds {
                            src_data[y as usize * cols + x as usize]
                        } else if let PaddingMode::Constant = border {
                            continue;
                        } else {
                            let my = border.map_index(y, rows);
                            let mx = border.map_index(x, cols);
                            src_data[my * cols + mx]
                        };
                        sum += val as f32 * weight;
                    }
                }
                // truncation, not rounding
                *dst_pixel = sum.clamp(0.0, 255.0) as u8;
            }
        });

    Ok(())
}
