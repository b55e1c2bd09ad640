/// Placeholder predictor
///
/// Stands in for the height and segmentation models until real ones are
/// wired up. Every run returns fresh uniform noise in [0, 1) shaped like
/// the input image.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Predictor, SyntheticOutput};
use crate::state::data::LoadedImage;

pub struct RandomPredictor {
    rng: StdRng,
}

impl RandomPredictor {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic stream for tests
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for RandomPredictor {
    fn name(&self) -> &str {
        "random placeholder"
    }

    fn predict(&mut self, image: &LoadedImage) -> SyntheticOutput {
        let rng = &mut self.rng;
        // gen::<f32>() samples the half-open interval [0, 1)
        SyntheticOutput::from_fn(image.height() as usize, image.width() as usize, |_, _, _| {
            rng.gen::<f32>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn blank(width: u32, height: u32) -> LoadedImage {
        LoadedImage::new("blank.png", RgbaImage::new(width, height), 1280)
    }

    #[test]
    fn test_output_matches_image_shape() {
        let mut predictor = RandomPredictor::with_seed(7);
        let output = predictor.predict(&blank(64, 64));

        assert_eq!(output.shape(), (64, 64, 3));
        assert!(output.values().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_non_square_shape_is_height_first() {
        let mut predictor = RandomPredictor::with_seed(7);
        let output = predictor.predict(&blank(40, 10));
        assert_eq!(output.shape(), (10, 40, 3));
    }

    #[test]
    fn test_each_run_is_fresh() {
        let mut predictor = RandomPredictor::with_seed(42);
        let image = blank(8, 8);

        let first = predictor.predict(&image);
        let second = predictor.predict(&image);
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_output() {
        let image = blank(8, 8);
        let a = RandomPredictor::with_seed(3).predict(&image);
        let b = RandomPredictor::with_seed(3).predict(&image);
        assert_eq!(a, b);
    }
}
