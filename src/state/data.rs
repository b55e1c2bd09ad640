/// Shared data structures for the application state
///
/// These types flow between the imagery loaders, the session state
/// and the page dispatcher.

use iced::widget::image::Handle;
use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

use crate::imagery::preview;

/// Top-level page picked in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Predictions,
    Insights,
    /// Listed in the sidebar but has no content of its own
    Others,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Predictions, Page::Insights, Page::Others];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Predictions => "Predictions",
            Page::Insights => "Insights",
            Page::Others => "Others",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which model's output the Predictions page pretends to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    HeightModel,
    SegmentationModel,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::HeightModel, ModelKind::SegmentationModel];

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::HeightModel => "Height Model",
            ModelKind::SegmentationModel => "Segmentation Model",
        }
    }

    /// Caption under the output image
    pub fn output_caption(self) -> &'static str {
        match self {
            ModelKind::HeightModel => "Height Output",
            ModelKind::SegmentationModel => "Segmentation Output",
        }
    }

    pub fn metrics_heading(self) -> &'static str {
        match self {
            ModelKind::HeightModel => "Performance Metrics for Height Model",
            ModelKind::SegmentationModel => "Performance Metrics for Segmentation Model",
        }
    }

    /// Fixed metric line. Not computed from any output.
    pub fn metric_line(self) -> &'static str {
        match self {
            ModelKind::HeightModel => "Mean Absolute Error: 0.5",
            ModelKind::SegmentationModel => "Dice Score: 0.85",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two upload controls on the Predictions page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    Image,
    Mask,
}

impl UploadSlot {
    pub fn prompt(self) -> &'static str {
        match self {
            UploadSlot::Image => "Or Upload Your Own Satellite Image",
            UploadSlot::Mask => "Upload Corresponding Mask Data",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            UploadSlot::Image => "Uploaded Satellite Image",
            UploadSlot::Mask => "Corresponding Mask",
        }
    }
}

/// A decoded image ready for display and prediction
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File name the image came from (e.g., "test_image1.jpg")
    pub name: String,
    /// Full-resolution pixels; prediction shapes come from these
    pub pixels: Arc<RgbaImage>,
    /// Display handle, possibly a downscaled preview
    pub handle: Handle,
}

impl LoadedImage {
    /// Wrap decoded pixels, building a preview no larger than `max_side`
    pub fn new(name: impl Into<String>, pixels: RgbaImage, max_side: u32) -> Self {
        let handle = preview::display_handle(&pixels, max_side);
        Self {
            name: name.into(),
            pixels: Arc::new(pixels),
            handle,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl PartialEq for LoadedImage {
    /// Two loads of the same file compare equal; handles are ignored
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && (Arc::ptr_eq(&self.pixels, &other.pixels) || self.pixels == other.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_labels_follow_sidebar_order() {
        let labels: Vec<String> = Page::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["Home", "Predictions", "Insights", "Others"]);
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_model_kind_defaults_to_height() {
        assert_eq!(ModelKind::default(), ModelKind::HeightModel);
    }

    #[test]
    fn test_metric_lines_are_fixed() {
        assert_eq!(ModelKind::HeightModel.metric_line(), "Mean Absolute Error: 0.5");
        assert_eq!(ModelKind::SegmentationModel.metric_line(), "Dice Score: 0.85");
        assert_eq!(ModelKind::SegmentationModel.output_caption(), "Segmentation Output");
    }

    #[test]
    fn test_loaded_image_keeps_original_size() {
        let image = LoadedImage::new("big.png", RgbaImage::new(300, 100), 64);
        assert_eq!((image.width(), image.height()), (300, 100));
    }
}
