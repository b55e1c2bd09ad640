/// Page dispatcher
///
/// Turns the session state into the ordered list of sections to draw.
/// This is pure data so the widget code in `view.rs` stays dumb and the
/// page logic can be tested without a window.

use crate::config::SampleAsset;
use crate::state::data::{LoadedImage, ModelKind, Page};
use crate::state::session::SessionState;

pub const WELCOME_TITLE: &str = "Welcome to Height Segmentation Model";
pub const WELCOME_BODY: &str = "This application allows users to upload satellite images and \
receive height and segmentation predictions based on a trained model.";

pub const PREDICTIONS_TITLE: &str = "Make Predictions";
pub const SAMPLES_HEADING: &str = "Select Samples from Test Set";
pub const UPLOAD_SUCCESS: &str = "Mask data uploaded successfully.";

pub const INSIGHTS_TITLE: &str = "Insights";
pub const INSIGHTS_BODY: &str = "Here you can find insights related to the model's performance \
and its impact on radio frequency propagation.";
pub const INSIGHTS_POINTS: [(&str, &str); 2] = [
    (
        "Understanding Clutter",
        "Clutter data is essential for optimizing network design.",
    ),
    (
        "Model Performance",
        "Regular evaluations are crucial for maintaining accuracy in predictions.",
    ),
];

pub const FOOTER_HEADING: &str = "About This App";
pub const FOOTER_BODY: &str = "This application aims to assist in optimizing telecommunications \
network design by providing accurate height and segmentation outputs from satellite imagery.";

/// Load state of a bundled asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetView {
    Loading,
    Ready(LoadedImage),
    /// Holds the "asset unavailable: ..." message
    Unavailable(String),
}

/// One button in the sample gallery
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTile {
    pub index: usize,
    pub name: String,
    /// Shown under the button once this sample is the active selection
    pub preview: Option<LoadedImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Home { illustration: AssetView },
    PredictionsTitle,
    ModelPicker { selected: ModelKind },
    SampleGallery { tiles: Vec<SampleTile> },
    UploadForm { image: Option<String>, mask: Option<String> },
    /// Only emitted when both uploads are present
    UploadPreview { image: LoadedImage, mask: LoadedImage },
    Notice(String),
    /// Only emitted when there is an active selection
    RunModel,
    ModelOutput {
        kind: ModelKind,
        shape: (usize, usize, usize),
        rendered: LoadedImage,
    },
    Insights,
    Footer,
}

/// Sections for the current page, always ending with the footer
pub fn sections(session: &SessionState, home: &AssetView, samples: &[SampleAsset]) -> Vec<Section> {
    let mut out = match session.page {
        Page::Home => vec![Section::Home {
            illustration: home.clone(),
        }],
        Page::Predictions => predictions(session, samples),
        Page::Insights => vec![Section::Insights],
        Page::Others => Vec::new(),
    };

    out.push(Section::Footer);
    out
}

fn predictions(session: &SessionState, samples: &[SampleAsset]) -> Vec<Section> {
    let state = &session.predictions;
    let active_sample = state.active.as_ref().and_then(|active| active.sample_index());

    let tiles = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| SampleTile {
            index,
            name: sample.name.clone(),
            preview: match (&state.active, active_sample) {
                (Some(active), Some(selected)) if selected == index => Some(active.image().clone()),
                _ => None,
            },
        })
        .collect();

    let mut out = vec![
        Section::PredictionsTitle,
        Section::ModelPicker {
            selected: state.model_kind,
        },
        Section::SampleGallery { tiles },
        Section::UploadForm {
            image: state.uploaded_image.as_ref().map(|image| image.name.clone()),
            mask: state.uploaded_mask.as_ref().map(|mask| mask.name.clone()),
        },
    ];

    if let Some((image, mask)) = state.upload_pair() {
        out.push(Section::UploadPreview {
            image: image.clone(),
            mask: mask.clone(),
        });
    }

    if let Some(notice) = &state.notice {
        out.push(Section::Notice(notice.clone()));
    }

    if state.active.is_some() {
        out.push(Section::RunModel);

        if let Some(result) = &state.output {
            out.push(Section::ModelOutput {
                kind: result.kind,
                shape: result.output.shape(),
                rendered: result.rendered.clone(),
            });
        }
    }

    out
}
