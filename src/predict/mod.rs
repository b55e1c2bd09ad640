/// Prediction module
///
/// The dashboard only talks to the `Predictor` trait. Today the sole
/// implementation is `RandomPredictor`, a stub that returns noise; a real
/// height or segmentation model can be swapped in without touching the UI.

pub mod output;
pub mod random;

pub use output::SyntheticOutput;
pub use random::RandomPredictor;

use crate::state::data::LoadedImage;

/// Anything that can turn an image into a (height, width, 3) output
pub trait Predictor: Send {
    /// Short name for logs
    fn name(&self) -> &str;

    fn predict(&mut self, image: &LoadedImage) -> SyntheticOutput;
}
