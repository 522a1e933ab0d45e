use cinza_image::{Image, ImageError};

use crate::parallel;

// Contrast stretch pivot, fixed at 118 rather than the midpoint 128.
const CONTRAST_PIVOT: f32 = 118.0;

fn check_same_size(src: &Image<u8, 1>, dst: &Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Adjust the brightness of an image.
///
/// Adds `delta` to every pixel intensity:
///
/// dst(x,y) = clamp(src(x,y) + delta, 0, 255)
///
/// The clamped value is truncated to `u8`, never rounded.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `delta` - The brightness shift, positive or negative.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn adjust_brightness(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    delta: f32,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        let val = src_pixel as f32 + delta;
        *dst_pixel = val.clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

/// Adjust the contrast of an image.
///
/// Stretches the intensities around the pivot value 118:
///
/// f = 259 * (contrast + 255) / (255 * (259 - contrast))
/// dst(x,y) = clamp(f * (src(x,y) - 118) + 128, 0, 255)
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `contrast` - The contrast level; 0 leaves the factor at 1.
///
/// # Errors
///
/// Returns an error if `contrast` is 259 (the stretch factor diverges) or
/// not finite, or if the sizes of `src` and `dst` do not match.
pub fn adjust_contrast(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    contrast: f32,
) -> Result<(), ImageError> {
    if !contrast.is_finite() || contrast == 259.0 {
        return Err(ImageError::InvalidContrastFactor(contrast));
    }

    check_same_size(src, dst)?;

    let factor = 259.0 * (contrast + 255.0) / (255.0 * (259.0 - contrast));

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        let val = factor * (src_pixel as f32 - CONTRAST_PIVOT) + 128.0;
        *dst_pixel = val.clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

/// Invert an image.
///
/// dst(x,y) = 255 - src(x,y)
///
/// The output is always in range, so no clamping is applied.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn invert(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = 255 - src_pixel;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinza_image::ImageSize;

    #[test]
    fn test_adjust_brightness() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 250],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        adjust_brightness(&src, &mut dst, 20.0)?;
        assert_eq!(dst.as_slice(), &[30, 255]);

        adjust_brightness(&src, &mut dst, -20.0)?;
        assert_eq!(dst.as_slice(), &[0, 230]);

        Ok(())
    }

    #[test]
    fn test_adjust_brightness_saturates() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            100,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        adjust_brightness(&src, &mut dst, 200.0)?;
        assert_eq!(dst.as_slice(), &[255; 25]);

        adjust_brightness(&src, &mut dst, 1000.0)?;
        assert_eq!(dst.as_slice(), &[255; 25]);

        adjust_brightness(&src, &mut dst, -1000.0)?;
        assert_eq!(dst.as_slice(), &[0; 25]);

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_zero_level() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 118, 250],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        // factor 1 around pivot 118 reduces to a +10 shift
        adjust_contrast(&src, &mut dst, 0.0)?;
        assert_eq!(dst.as_slice(), &[10, 128, 255]);

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_rejects_divergent_level() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            100,
        )?;
        let mut dst = src.clone();

        let res = adjust_contrast(&src, &mut dst, 259.0);
        assert_eq!(res, Err(ImageError::InvalidContrastFactor(259.0)));

        let res = adjust_contrast(&src, &mut dst, f32::NAN);
        assert!(res.is_err());

        Ok(())
    }

    #[test]
    fn test_invert_roundtrip() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![0, 1, 127, 255],
        )?;
        let mut inverted = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        let mut restored = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        invert(&src, &mut inverted)?;
        assert_eq!(inverted.as_slice(), &[255, 254, 128, 0]);

        invert(&inverted, &mut restored)?;
        assert_eq!(restored.as_slice(), src.as_slice());

        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        let res = adjust_brightness(&src, &mut dst, 1.0);
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 3, 2)));

        Ok(())
    }
}
