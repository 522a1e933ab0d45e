use cinza_image::{Image, ImageError};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add gaussian noise to an image.
///
/// Draws one independent sample per pixel from `Normal(mean, sqrt(variance))`,
/// adds it to the pixel intensity, clamps the result to `[0, 255]` and
/// truncates to `u8`.
///
/// The generator is passed explicitly so callers can seed it for
/// reproducible output; the pixels are consumed sequentially in row-major
/// order, so a fixed seed yields byte-identical images.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `rng` - The random generator to draw the noise samples from.
/// * `mean` - The mean of the noise distribution.
/// * `variance` - The variance of the noise distribution; zero adds `mean`
///   to every pixel.
///
/// # Errors
///
/// Returns an error if `variance` is negative or not finite, or if `src` and
/// `dst` sizes differ.
///
/// # Example
///
/// ```
/// use cinza_image::{Image, ImageSize};
/// use cinza_imgproc::noise::add_gaussian_noise;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let src = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     128,
/// ).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// add_gaussian_noise(&src, &mut dst, &mut rng, 0.0, 25.0).unwrap();
/// ```
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    rng: &mut R,
    mean: f32,
    variance: f32,
) -> Result<(), ImageError> {
    if !variance.is_finite() || variance < 0.0 {
        return Err(ImageError::InvalidNoiseVariance(variance));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let normal = Normal::new(mean, variance.sqrt())
        .map_err(|_| ImageError::InvalidNoiseVariance(variance))?;

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&src_pixel, dst_pixel)| {
            let val = src_pixel as f32 + normal.sample(rng);
            // truncation, not rounding
            *dst_pixel = val.clamp(0.0, 255.0) as u8;
        });

    Ok(())
}
