use cinza_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

/// A border type for the spatial padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// This border type fills the border with a single, constant color value.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// This border type reflects the pixel values at the boundary, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i - 1;
            } else {
                i = 2 * len - i - 1;
            }
        }
        i as usize
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Constant`: returns 0 (callers substitute the fill value instead)
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension.
    ///
    /// # Returns
    /// A valid mapped index within `[0, len)`.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        match self {
            PaddingMode::Replicate => i.clamp(0, len as isize - 1) as usize,
            PaddingMode::Reflect => Self::reflect(i, len),
            PaddingMode::Reflect101 => Self::reflect101(i, len),
            PaddingMode::Constant => 0,
        }
    }
}

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// Uniform padding of `extent` pixels on all four sides.
    pub fn all(extent: usize) -> Self {
        Self {
            top: extent,
            bottom: extent,
            left: extent,
            right: extent,
        }
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        new_size.width == old_size.width + self.left + self.right
            && new_size.height == old_size.height + self.top + self.bottom
    }
}

/// Creates a new image with spatial padding applied to reach target size,
/// centering the original image and using the specified fill value and type.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image where the padded output will be stored.
/// * `padding` - The amount of padding (in pixels) for all four sides defined in [`Padding2D`].
/// * `padding_mode` - The type of border handling to use defined in [`PaddingMode`].
/// * `constant_value` - The pixel value used for constant padding, one value per channel.
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match with the expected size
/// i.e. after applying padding specified in argument `padding` on `src`.
///
/// # Example
///
/// ```
/// use cinza_image::{Image, ImageSize};
/// use cinza_imgproc::padding::{spatial_padding, Padding2D, PaddingMode};
///
/// let src = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1u8; 2 * 2],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     0u8,
/// ).unwrap();
///
/// spatial_padding(&src, &mut dst, Padding2D::all(1), PaddingMode::Constant, [0u8]).unwrap();
///
/// assert_eq!(dst.get(0, 0, 0), Some(&0));
/// assert_eq!(dst.get(1, 1, 0), Some(&1));
/// ```
pub fn spatial_padding<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if !padding.validate_size(src.size(), dst.size()) {
        return Err(ImageError::InvalidImageSize(
            src.width() + padding.left + padding.right,
            src.height() + padding.top + padding.bottom,
            dst.width(),
            dst.height(),
        ));
    }

    if dst.as_slice().is_empty() {
        return Ok(());
    }

    // an empty source leaves only the fill value
    if src.as_slice().is_empty() {
        for dst_pixel in dst.as_slice_mut().chunks_exact_mut(C) {
            dst_pixel.copy_from_slice(&constant_value);
        }
        return Ok(());
    }

    let (old_width, old_height) = (src.width(), src.height());
    let new_width = dst.width();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(new_width * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let sy = y as isize - padding.top as isize;
            for (x, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
                let sx = x as isize - padding.left as isize;
                let in_bounds =
                    sy >= 0 && sy < old_height as isize && sx >= 0 && sx < old_width as isize;
                if in_bounds {
                    let src_idx = (sy as usize * old_width + sx as usize) * C;
                    dst_pixel.copy_from_slice(&src_data[src_idx..src_idx + C]);
                } else if let PaddingMode::Constant = padding_mode {
                    dst_pixel.copy_from_slice(&constant_value);
                } else {
                    let my = padding_mode.map_index(sy, old_height);
                    let mx = padding_mode.map_index(sx, old_width);
                    let src_idx = (my * old_width + mx) * C;
                    dst_pixel.copy_from_slice(&src_data[src_idx..src_idx + C]);
                }
            }
        });

    Ok(())
}
