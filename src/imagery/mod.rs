/// Image handling module
///
/// This module handles:
/// - Loading bundled assets (home illustration, test samples)
/// - Validating and decoding uploaded images and masks
/// - Building size-capped on-screen previews

pub mod loader;
pub mod preview;
