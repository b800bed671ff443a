//! Browser half of the attachment pipeline: file → data URI → canvas → JPEG.

use gloo::file::futures::read_as_data_url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement};

use crate::compress::fit_within;
use crate::config::CompressionConfig;
use crate::error::ComposerError;
use crate::types::{Dimensions, EncodedImage};

/// Format every compressed attachment is re-encoded to.
pub const COMPRESSED_MIME: &str = "image/jpeg";

/// Read a picked file into a full-resolution preview.
pub async fn read_preview(file: &File) -> Result<EncodedImage, ComposerError> {
    let blob = gloo::file::File::from(file.clone());
    let data_url = read_as_data_url(&blob)
        .await
        .map_err(|e| ComposerError::Read(e.to_string()))?;
    EncodedImage::parse(data_url)
        .map_err(|_| ComposerError::Read(format!("{} is empty or unreadable", file.name())))
}

/// Downscale `preview` to fit the configured bound and re-encode it as JPEG.
///
/// The size budget is not checked here; the draft does that when it stores
/// the result.
pub async fn recompress(
    preview: &EncodedImage,
    config: &CompressionConfig,
) -> Result<EncodedImage, ComposerError> {
    let image = decode(preview).await?;
    let source = Dimensions::new(image.natural_width(), image.natural_height());
    if source.width == 0 || source.height == 0 {
        return Err(ComposerError::Decode("image has no dimensions".into()));
    }
    let target = fit_within(source, config.max_dimension);

    let canvas: HtmlCanvasElement = gloo_utils::document()
        .create_element("canvas")
        .map_err(|e| ComposerError::Canvas(describe(e)))?
        .dyn_into()
        .map_err(|_| ComposerError::Canvas("created element is not a canvas".into()))?;
    canvas.set_width(target.width);
    canvas.set_height(target.height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| ComposerError::Canvas(describe(e)))?
        .ok_or_else(|| ComposerError::Canvas("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| ComposerError::Canvas("unexpected context type".into()))?;
    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            target.width as f64,
            target.height as f64,
        )
        .map_err(|e| ComposerError::Canvas(describe(e)))?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options(COMPRESSED_MIME, &JsValue::from_f64(config.quality))
        .map_err(|e| ComposerError::Canvas(describe(e)))?;
    let compressed = EncodedImage::parse(data_url)
        .map_err(|_| ComposerError::Canvas("canvas produced no image".into()))?;

    log::debug!(
        "recompressed {}x{} -> {}x{}, {} -> {} bytes",
        source.width,
        source.height,
        target.width,
        target.height,
        preview.encoded_len(),
        compressed.encoded_len()
    );
    Ok(compressed)
}

/// Decode a data URI with the browser's native image element.
pub async fn decode(src: &EncodedImage) -> Result<HtmlImageElement, ComposerError> {
    let image = HtmlImageElement::new().map_err(|e| ComposerError::Decode(describe(e)))?;
    image.set_src(src.as_str());
    JsFuture::from(image.decode())
        .await
        .map_err(|e| ComposerError::Decode(describe(e)))?;
    Ok(image)
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
