#![cfg(target_arch = "wasm32")]

use message_composer::draft::{Applied, Draft};
use message_composer::pipeline::{decode, read_preview, recompress};
use message_composer::{ComposerError, CompressionConfig, EncodedImage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, File, FilePropertyBag, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

/// PNG data URI of a solid image with the given size.
fn solid_png(width: u32, height: u32) -> EncodedImage {
    let canvas: HtmlCanvasElement = gloo_utils::document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    context.set_fill_style_str("#3b82f6");
    context.fill_rect(0.0, 0.0, width as f64, height as f64);
    EncodedImage::parse(canvas.to_data_url().unwrap()).unwrap()
}

async fn compressed_size(width: u32, height: u32) -> (u32, u32) {
    let compressed = recompress(&solid_png(width, height), &CompressionConfig::default())
        .await
        .unwrap();
    assert_eq!(compressed.mime_type(), "image/jpeg");
    let image = decode(&compressed).await.unwrap();
    (image.natural_width(), image.natural_height())
}

fn text_file(content: &str, mime: &str) -> File {
    let options = FilePropertyBag::new();
    options.set_type(mime);
    let bits = js_sys::Array::of1(&JsValue::from_str(content));
    File::new_with_str_sequence_and_options(&bits, "upload.bin", &options).unwrap()
}

#[wasm_bindgen_test]
async fn test_landscape_resized_to_300_by_150() {
    assert_eq!(compressed_size(1200, 600).await, (300, 150));
}

#[wasm_bindgen_test]
async fn test_portrait_resized_to_150_by_300() {
    assert_eq!(compressed_size(600, 1200).await, (150, 300));
}

#[wasm_bindgen_test]
async fn test_small_image_keeps_size() {
    assert_eq!(compressed_size(120, 80).await, (120, 80));
}

#[wasm_bindgen_test]
async fn test_oversized_output_rejected_by_draft() {
    let config = CompressionConfig {
        max_encoded_len: 64,
        ..CompressionConfig::default()
    };
    let preview = solid_png(800, 800);
    let mut draft = Draft::new();
    let ticket = draft.begin_selection(Some("image/png")).unwrap();
    draft.apply_preview(ticket, preview.clone());

    let result = recompress(&preview, &config).await;
    let outcome = draft.apply_compressed(ticket, result, &config);
    assert!(matches!(outcome, Err(ComposerError::ImageTooLarge { limit: 64, .. })));
    assert!(draft.compressed().is_none());
    assert_eq!(draft.preview(), Some(&preview));
}

#[wasm_bindgen_test]
async fn test_read_preview_keeps_declared_type() {
    let preview = read_preview(&text_file("hello", "image/png")).await.unwrap();
    assert_eq!(preview.as_str(), "data:image/png;base64,aGVsbG8=");
}

#[wasm_bindgen_test]
async fn test_undecodable_image_fails() {
    let preview = read_preview(&text_file("hello", "image/png")).await.unwrap();
    let result = recompress(&preview, &CompressionConfig::default()).await;
    assert!(matches!(result, Err(ComposerError::Decode(_))));
}

#[wasm_bindgen_test]
async fn test_stale_pipeline_result_is_dropped() {
    let config = CompressionConfig::default();
    let mut draft = Draft::new();
    let first = draft.begin_selection(Some("image/png")).unwrap();
    let second = draft.begin_selection(Some("image/png")).unwrap();

    let late = recompress(&solid_png(1200, 600), &config).await;
    assert_eq!(draft.apply_compressed(first, late, &config), Ok(Applied::Stale));
    assert!(draft.compressed().is_none());
    assert!(draft.is_current(second));
}
