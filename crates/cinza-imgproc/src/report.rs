use cinza_image::{Image, ImageError};

use crate::histogram::compute_histogram;

/// An image annotated with a label and its 256-bin intensity histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage {
    /// Label shown by the presentation layer.
    pub label: String,
    /// The image itself.
    pub image: Image<u8, 1>,
    /// Count of pixels per intensity, bin `i` counts intensity exactly `i`.
    pub histogram: Vec<usize>,
}

impl LabeledImage {
    fn new(label: &str, image: &Image<u8, 1>) -> Result<Self, ImageError> {
        let mut histogram = vec![0; 256];
        compute_histogram(image, &mut histogram, 256)?;
        Ok(Self {
            label: label.to_string(),
            image: image.clone(),
            histogram,
        })
    }
}

/// Side-by-side packaging of an original/filtered image pair for display.
///
/// Holds both images together with their intensity histograms so a
/// presentation layer can render the comparison without touching pixel math.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// The unfiltered input image.
    pub original: LabeledImage,
    /// The transformed image.
    pub filtered: LabeledImage,
}

impl ComparisonReport {
    /// Build a report from an original/filtered pair.
    ///
    /// # Arguments
    ///
    /// * `original` - The unfiltered input image.
    /// * `filtered` - The transformed image, same shape as `original`.
    /// * `label` - Label for the filtered image; the original is labeled
    ///   `"original"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two images differ in size.
    pub fn build(
        original: &Image<u8, 1>,
        filtered: &Image<u8, 1>,
        label: &str,
    ) -> Result<Self, ImageError> {
        if original.size() != filtered.size() {
            return Err(ImageError::InvalidImageSize(
                original.cols(),
                original.rows(),
                filtered.cols(),
                filtered.rows(),
            ));
        }

        Ok(Self {
            original: LabeledImage::new("original", original)?,
            filtered: LabeledImage::new(label, filtered)?,
        })
    }
}
