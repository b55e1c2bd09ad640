/// Per-session dashboard state
///
/// Everything the user has picked, uploaded or run lives here. The iced
/// `update` loop calls one method per interaction; the page dispatcher
/// only reads it. Nothing survives a page change.

use super::data::{LoadedImage, ModelKind, Page, UploadSlot};
use crate::color;
use crate::predict::{Predictor, SyntheticOutput};

/// Preview cap used when none is configured
pub const DEFAULT_PREVIEW_MAX_SIDE: u32 = 1280;

/// The image that "Run Model" will operate on
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveSelection {
    /// One of the test-set samples, by index
    Sample { index: usize, image: LoadedImage },
    /// The uploaded satellite image (only when its mask is present too)
    Uploaded(LoadedImage),
}

impl ActiveSelection {
    pub fn image(&self) -> &LoadedImage {
        match self {
            ActiveSelection::Sample { image, .. } => image,
            ActiveSelection::Uploaded(image) => image,
        }
    }

    pub fn sample_index(&self) -> Option<usize> {
        match self {
            ActiveSelection::Sample { index, .. } => Some(*index),
            ActiveSelection::Uploaded(_) => None,
        }
    }
}

/// Result of the last "Run Model"
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    /// Model kind selected when the run happened
    pub kind: ModelKind,
    pub output: SyntheticOutput,
    /// The output quantized to RGB for display
    pub rendered: LoadedImage,
}

/// State of the Predictions page
#[derive(Debug, Clone, Default)]
pub struct PredictionsState {
    pub model_kind: ModelKind,
    pub uploaded_image: Option<LoadedImage>,
    pub uploaded_mask: Option<LoadedImage>,
    pub active: Option<ActiveSelection>,
    pub output: Option<ModelOutput>,
    /// Last user-facing problem (missing asset, bad upload)
    pub notice: Option<String>,
}

impl PredictionsState {
    /// Both uploads, when both are present
    pub fn upload_pair(&self) -> Option<(&LoadedImage, &LoadedImage)> {
        match (&self.uploaded_image, &self.uploaded_mask) {
            (Some(image), Some(mask)) => Some((image, mask)),
            _ => None,
        }
    }

    fn slot_mut(&mut self, slot: UploadSlot) -> &mut Option<LoadedImage> {
        match slot {
            UploadSlot::Image => &mut self.uploaded_image,
            UploadSlot::Mask => &mut self.uploaded_mask,
        }
    }

    fn drop_uploaded_selection(&mut self) {
        if matches!(self.active, Some(ActiveSelection::Uploaded(_))) {
            self.active = None;
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub page: Page,
    pub predictions: PredictionsState,
    /// Bumped on every page change; loads started in an older visit are stale
    visit: u64,
    preview_max_side: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_MAX_SIDE)
    }
}

impl SessionState {
    pub fn new(preview_max_side: u32) -> Self {
        Self {
            page: Page::default(),
            predictions: PredictionsState::default(),
            visit: 0,
            preview_max_side,
        }
    }

    pub fn visit(&self) -> u64 {
        self.visit
    }

    /// Whether a load started during `visit` still belongs to this page
    pub fn is_current(&self, visit: u64) -> bool {
        self.visit == visit && self.page == Page::Predictions
    }

    /// Switch pages. Leaving a page throws away its state.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        tracing::debug!("Navigating {} -> {}", self.page, page);
        self.page = page;
        self.visit += 1;
        self.predictions = PredictionsState::default();
    }

    /// Change model kind; an existing output belongs to the old kind, so drop it
    pub fn select_model(&mut self, kind: ModelKind) {
        let predictions = &mut self.predictions;
        if predictions.model_kind != kind {
            predictions.model_kind = kind;
            predictions.output = None;
        }
    }

    pub fn sample_loaded(&mut self, index: usize, image: LoadedImage) {
        let predictions = &mut self.predictions;
        predictions.active = Some(ActiveSelection::Sample { index, image });
        predictions.output = None;
        predictions.notice = None;
    }

    pub fn sample_failed(&mut self, message: String) {
        tracing::warn!("Sample failed to load: {}", message);
        let predictions = &mut self.predictions;
        predictions.output = None;
        predictions.notice = Some(message);
    }

    /// Store an upload. Completing the pair makes the uploaded image active.
    pub fn upload_loaded(&mut self, slot: UploadSlot, image: LoadedImage) {
        let predictions = &mut self.predictions;
        *predictions.slot_mut(slot) = Some(image);
        predictions.output = None;
        predictions.notice = None;

        match predictions.upload_pair().map(|(image, _)| image.clone()) {
            Some(image) => predictions.active = Some(ActiveSelection::Uploaded(image)),
            None => predictions.drop_uploaded_selection(),
        }
    }

    /// A bad upload empties its slot and breaks the pair
    pub fn upload_failed(&mut self, slot: UploadSlot, message: String) {
        tracing::warn!("Upload rejected: {}", message);
        let predictions = &mut self.predictions;
        *predictions.slot_mut(slot) = None;
        predictions.drop_uploaded_selection();
        predictions.output = None;
        predictions.notice = Some(message);
    }

    pub fn clear_upload(&mut self, slot: UploadSlot) {
        let predictions = &mut self.predictions;
        if predictions.slot_mut(slot).take().is_some() {
            predictions.drop_uploaded_selection();
            predictions.output = None;
        }
    }

    /// Run the predictor on the active selection.
    ///
    /// Returns false, changing nothing, when there is no active selection.
    pub fn run_model(&mut self, predictor: &mut dyn Predictor) -> bool {
        let predictions = &mut self.predictions;
        let Some(active) = &predictions.active else {
            return false;
        };

        let output = predictor.predict(active.image());
        let (height, width, channels) = output.shape();
        tracing::info!(
            "🚀 {} run with {} on {}: output {}x{}x{}",
            predictions.model_kind,
            predictor.name(),
            active.image().name,
            height,
            width,
            channels
        );

        let rendered = LoadedImage::new(
            predictions.model_kind.output_caption(),
            color::output_to_rgba(&output),
            self.preview_max_side,
        );
        predictions.output = Some(ModelOutput {
            kind: predictions.model_kind,
            output,
            rendered,
        });
        true
    }
}
