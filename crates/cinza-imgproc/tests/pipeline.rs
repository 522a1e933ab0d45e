use cinza_image::{Image, ImageError, ImageSize};
use cinza_imgproc::filter::{box_blur, gaussian_blur, median_blur};
use cinza_imgproc::noise::add_gaussian_noise;
use cinza_imgproc::padding::PaddingMode;
use cinza_imgproc::report::ComparisonReport;
use cinza_imgproc::{enhance, histogram};
use rand::{rngs::StdRng, SeedableRng};

fn gradient_image(size: ImageSize) -> Result<Image<u8, 1>, ImageError> {
    let data = (0..size.width * size.height)
        .map(|i| ((i * 255) / (size.width * size.height - 1)) as u8)
        .collect();
    Image::new(size, data)
}

#[test]
fn filters_preserve_dimensions() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 17,
        height: 11,
    };
    let src = gradient_image(size)?;
    let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

    box_blur(&src, &mut dst)?;
    assert_eq!(dst.size(), size);

    gaussian_blur(&src, &mut dst, 1.0)?;
    assert_eq!(dst.size(), size);

    median_blur(&src, &mut dst, 5, PaddingMode::Constant)?;
    assert_eq!(dst.size(), size);

    Ok(())
}

#[test]
fn median_removes_isolated_impulse() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 5,
        height: 5,
    };
    let mut data = vec![100u8; 25];
    data[2 * 5 + 2] = 255; // impulse in the interior
    let src = Image::new(size, data)?;

    let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;
    median_blur(&src, &mut dst, 3, PaddingMode::Constant)?;

    // the impulse is outvoted in every window; the zero-filled border wins
    // only at the corners, where five of the nine samples are padding
    #[rustfmt::skip]
    assert_eq!(
        dst.as_slice(),
        &[
            0,   100, 100, 100, 0,
            100, 100, 100, 100, 100,
            100, 100, 100, 100, 100,
            100, 100, 100, 100, 100,
            0,   100, 100, 100, 0,
        ],
    );

    Ok(())
}

#[test]
fn full_pipeline_is_deterministic_with_fixed_seed() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 32,
        height: 24,
    };
    let gray = gradient_image(size)?;

    let run = |seed: u64| -> Result<ComparisonReport, ImageError> {
        let mut noisy = Image::<u8, 1>::from_size_val(size, 0)?;
        let mut rng = StdRng::seed_from_u64(seed);
        add_gaussian_noise(&gray, &mut noisy, &mut rng, 0.0, 50.0)?;

        let mut brightened = Image::<u8, 1>::from_size_val(size, 0)?;
        enhance::adjust_brightness(&noisy, &mut brightened, 15.0)?;

        let mut denoised = Image::<u8, 1>::from_size_val(size, 0)?;
        median_blur(&brightened, &mut denoised, 3, PaddingMode::Constant)?;

        ComparisonReport::build(&gray, &denoised, "median")
    };

    let report_a = run(99)?;
    let report_b = run(99)?;
    assert_eq!(report_a, report_b);

    let report_c = run(100)?;
    assert_ne!(report_a.filtered.image, report_c.filtered.image);

    Ok(())
}

#[test]
fn report_histograms_count_every_pixel() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 9,
        height: 7,
    };
    let gray = gradient_image(size)?;

    let mut blurred = Image::<u8, 1>::from_size_val(size, 0)?;
    gaussian_blur(&gray, &mut blurred, 1.0)?;

    let report = ComparisonReport::build(&gray, &blurred, "gaussian")?;
    let pixels = size.width * size.height;
    assert_eq!(report.original.histogram.iter().sum::<usize>(), pixels);
    assert_eq!(report.filtered.histogram.iter().sum::<usize>(), pixels);

    // the report histogram matches a direct computation
    let mut direct = vec![0; 256];
    histogram::compute_histogram(&blurred, &mut direct, 256)?;
    assert_eq!(report.filtered.histogram, direct);

    Ok(())
}
