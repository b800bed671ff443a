use crate::config::CompressionConfig;
use crate::error::ComposerError;
use crate::types::{Dimensions, EncodedImage};

/// Target canvas size for an image of `source` size.
///
/// Images already inside the `max_dimension` square keep their size. Larger
/// ones are scaled so the longer side equals `max_dimension`; ties scale by
/// height. Fractions truncate like a canvas `width`/`height` attribute, with
/// a floor of one pixel.
pub fn fit_within(source: Dimensions, max_dimension: u32) -> Dimensions {
    let Dimensions { width, height } = source;
    if width <= max_dimension && height <= max_dimension {
        return source;
    }

    let max = max_dimension as f64;
    let (w, h) = (width as f64, height as f64);
    let (target_w, target_h) = if width > height {
        (max, h * max / w)
    } else {
        (w * max / h, max)
    };

    Dimensions::new((target_w as u32).max(1), (target_h as u32).max(1))
}

/// Accept a compressed image only if it fits the configured size budget.
pub fn enforce_budget(
    image: EncodedImage,
    config: &CompressionConfig,
) -> Result<EncodedImage, ComposerError> {
    let len = image.encoded_len();
    if len > config.max_encoded_len {
        return Err(ComposerError::ImageTooLarge {
            len,
            limit: config.max_encoded_len,
        });
    }
    Ok(image)
}
