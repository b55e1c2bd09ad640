/// On-screen previews
///
/// Satellite tiles can be large. The GPU only ever sees a copy whose
/// longest side is capped; the full-resolution pixels stay with the
/// `LoadedImage` for prediction.

use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};

/// Downscale `pixels` so neither side exceeds `max_side`.
///
/// Returns `None` when the image already fits, so callers can reuse the
/// original buffer. Aspect ratio is preserved; sides never drop below 1px.
pub fn fit_within(pixels: &RgbaImage, max_side: u32) -> Option<RgbaImage> {
    let (width, height) = pixels.dimensions();
    let longest = width.max(height);

    if max_side == 0 || longest <= max_side {
        return None;
    }

    let scale = max_side as f64 / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    Some(image::imageops::resize(pixels, new_width, new_height, FilterType::Triangle))
}

/// Build the iced image handle used to draw `pixels`
pub fn display_handle(pixels: &RgbaImage, max_side: u32) -> Handle {
    match fit_within(pixels, max_side) {
        Some(small) => {
            let (width, height) = small.dimensions();
            Handle::from_rgba(width, height, small.into_raw())
        }
        None => {
            let (width, height) = pixels.dimensions();
            Handle::from_rgba(width, height, pixels.as_raw().clone())
        }
    }
}
