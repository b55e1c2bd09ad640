/// Color conversion for model outputs
///
/// Predictions are float arrays in [0, 1). To put them on screen they are
/// quantized to 8-bit sRGB with an opaque alpha channel.

use image::{Rgba, RgbaImage};

use crate::predict::SyntheticOutput;

/// Map a unit float to an 8-bit channel value.
///
/// Values outside [0, 1] are clamped; NaN maps to 0.
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render a (height, width, 3) output as an RGBA image
pub fn output_to_rgba(output: &SyntheticOutput) -> RgbaImage {
    let (height, width, _) = output.shape();

    RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        let [r, g, b] = output.pixel(y as usize, x as usize);
        Rgba([unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_to_u8_endpoints() {
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(0.5), 128);
        assert_eq!(unit_to_u8(0.999), 255);
        assert_eq!(unit_to_u8(1.0), 255);
    }

    #[test]
    fn test_unit_to_u8_clamps() {
        assert_eq!(unit_to_u8(-3.0), 0);
        assert_eq!(unit_to_u8(7.0), 255);
        assert_eq!(unit_to_u8(f32::NAN), 0);
    }

    #[test]
    fn test_output_to_rgba_is_opaque_and_sized() {
        let output = SyntheticOutput::from_fn(2, 3, |y, x, c| ((y + x + c) % 4) as f32 / 4.0);
        let rgba = output_to_rgba(&output);

        assert_eq!(rgba.dimensions(), (3, 2));
        assert!(rgba.pixels().all(|p| p.0[3] == 255));
        // row 1, col 2 -> 0.75, 0.0, 0.25
        assert_eq!(rgba.get_pixel(2, 1).0, [191, 0, 64, 255]);
    }
}
