use argh::FromArgs;
use rand::{rngs::StdRng, SeedableRng};

use cinza::image::{Image, ImageSize};
use cinza::imgproc::{
    enhance,
    filter::{box_blur, gaussian_blur, median_blur},
    noise::add_gaussian_noise,
    padding::PaddingMode,
    report::ComparisonReport,
};

#[derive(FromArgs)]
/// Run the denoising pipeline on a synthetic gradient image
struct Args {
    /// the filter to apply: box, gaussian, median, brightness, contrast or invert
    #[argh(option)]
    filter: String,

    /// the median window size
    #[argh(option, default = "3")]
    kernel_size: usize,

    /// the seed for the noise generator
    #[argh(option, default = "42")]
    seed: u64,

    /// the mean of the injected gaussian noise
    #[argh(option, default = "0.0")]
    noise_mean: f32,

    /// the variance of the injected gaussian noise
    #[argh(option, default = "100.0")]
    noise_variance: f32,

    /// the brightness shift for the brightness filter
    #[argh(option, default = "40.0")]
    delta: f32,

    /// the contrast level for the contrast filter
    #[argh(option, default = "64.0")]
    contrast: f32,
}

fn mean_intensity(image: &Image<u8, 1>) -> f32 {
    if image.as_slice().is_empty() {
        return 0.0;
    }
    let sum: u64 = image.as_slice().iter().map(|&px| px as u64).sum();
    sum as f32 / image.as_slice().len() as f32
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // synthesize a grayscale gradient as pipeline input
    let size = ImageSize {
        width: 320,
        height: 240,
    };
    let gray = Image::<u8, 1>::new(
        size,
        (0..size.width * size.height)
            .map(|i| ((i % size.width) * 255 / (size.width - 1)) as u8)
            .collect(),
    )?;

    // inject noise with a seeded generator so runs are reproducible
    let mut noisy = Image::<u8, 1>::from_size_val(size, 0)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    add_gaussian_noise(
        &gray,
        &mut noisy,
        &mut rng,
        args.noise_mean,
        args.noise_variance,
    )?;
    log::info!(
        "injected noise (mean {}, variance {}): intensity {:.2} -> {:.2}",
        args.noise_mean,
        args.noise_variance,
        mean_intensity(&gray),
        mean_intensity(&noisy),
    );

    let mut filtered = Image::<u8, 1>::from_size_val(size, 0)?;
    match args.filter.to_lowercase().as_str() {
        "box" => {
            box_blur(&noisy, &mut filtered)?;
        }
        "gaussian" => {
            gaussian_blur(&noisy, &mut filtered, 1.5)?;
        }
        "median" => {
            median_blur(&noisy, &mut filtered, args.kernel_size, PaddingMode::Constant)?;
        }
        "brightness" => {
            enhance::adjust_brightness(&noisy, &mut filtered, args.delta)?;
        }
        "contrast" => {
            enhance::adjust_contrast(&noisy, &mut filtered, args.contrast)?;
        }
        "invert" => {
            enhance::invert(&noisy, &mut filtered)?;
        }
        _ => {
            return Err(format!("unknown filter: {}", args.filter).into());
        }
    }

    let report = ComparisonReport::build(&noisy, &filtered, &args.filter)?;

    let peak = |hist: &[usize]| hist.iter().enumerate().max_by_key(|(_, &c)| c).map(|(i, _)| i);
    log::info!(
        "{}: intensity {:.2} -> {:.2}, histogram peak {:?} -> {:?}",
        report.filtered.label,
        mean_intensity(&report.original.image),
        mean_intensity(&report.filtered.image),
        peak(&report.original.histogram),
        peak(&report.filtered.histogram),
    );

    Ok(())
}
