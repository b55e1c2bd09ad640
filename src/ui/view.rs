/// Widgets for each dispatcher section
///
/// Each `Section` becomes one iced element. Nothing here decides what is
/// shown, only how.

use iced::widget::image::Handle;
use iced::widget::{button, column, horizontal_rule, pick_list, row, text, Column, Image, Row};
use iced::{Color, Element, Length};

use super::sections::{self, AssetView, SampleTile, Section};
use crate::state::data::{LoadedImage, ModelKind, UploadSlot};
use crate::Message;

const TITLE_SIZE: u16 = 36;
const SUBHEADER_SIZE: u16 = 22;
const BODY_SIZE: u16 = 16;
const CAPTION_SIZE: u16 = 13;

const NOTICE_COLOR: Color = Color { r: 0.95, g: 0.45, b: 0.4, a: 1.0 };
const MUTED_COLOR: Color = Color { r: 0.6, g: 0.6, b: 0.6, a: 1.0 };

pub fn render<'a>(section: Section) -> Element<'a, Message> {
    match section {
        Section::Home { illustration } => home(illustration),
        Section::PredictionsTitle => text(sections::PREDICTIONS_TITLE).size(TITLE_SIZE).into(),
        Section::ModelPicker { selected } => model_picker(selected),
        Section::SampleGallery { tiles } => sample_gallery(tiles),
        Section::UploadForm { image, mask } => upload_form(image, mask),
        Section::UploadPreview { image, mask } => upload_preview(image, mask),
        Section::Notice(message) => text(message).size(BODY_SIZE).color(NOTICE_COLOR).into(),
        Section::RunModel => button("Run Model").on_press(Message::RunModel).padding(10).into(),
        Section::ModelOutput { kind, shape, rendered } => model_output(kind, shape, rendered),
        Section::Insights => insights(),
        Section::Footer => footer(),
    }
}

fn picture<'a>(handle: Handle) -> Element<'a, Message> {
    Image::<Handle>::new(handle).width(Length::Fill).into()
}

/// Image with a caption underneath
fn captioned<'a>(image: LoadedImage, caption: String) -> Element<'a, Message> {
    column![
        picture(image.handle),
        text(caption).size(CAPTION_SIZE).color(MUTED_COLOR),
    ]
    .spacing(4)
    .into()
}

fn home<'a>(illustration: AssetView) -> Element<'a, Message> {
    let figure: Element<'a, Message> = match illustration {
        AssetView::Ready(image) => picture(image.handle),
        AssetView::Loading => text("Loading...").size(BODY_SIZE).color(MUTED_COLOR).into(),
        AssetView::Unavailable(message) => text(message).size(BODY_SIZE).color(NOTICE_COLOR).into(),
    };

    column![
        text(sections::WELCOME_TITLE).size(TITLE_SIZE),
        text(sections::WELCOME_BODY).size(BODY_SIZE),
        figure,
    ]
    .spacing(16)
    .into()
}

fn model_picker<'a>(selected: ModelKind) -> Element<'a, Message> {
    column![
        text("Select Model Type").size(BODY_SIZE),
        pick_list(ModelKind::ALL, Some(selected), Message::ModelSelected),
    ]
    .spacing(6)
    .into()
}

fn sample_gallery<'a>(tiles: Vec<SampleTile>) -> Element<'a, Message> {
    let columns: Vec<Element<'a, Message>> = tiles.into_iter().map(|tile| {
        let mut cell = Column::new()
            .spacing(8)
            .width(Length::FillPortion(1))
            .push(button(text(tile.name.clone())).on_press(Message::SampleClicked(tile.index)));

        if let Some(preview) = tile.preview {
            cell = cell.push(captioned(preview, format!("Selected {}", tile.name)));
        }

        cell.into()
    })
    .collect();

    column![
        text(sections::SAMPLES_HEADING).size(SUBHEADER_SIZE),
        Row::with_children(columns).spacing(16),
    ]
    .spacing(10)
    .into()
}

/// One upload control: prompt, browse button, and the current file if any
fn upload_control<'a>(slot: UploadSlot, current: Option<String>) -> Element<'a, Message> {
    let status: Element<'a, Message> = match current {
        Some(name) => row![
            text(name).size(CAPTION_SIZE),
            button(text("Clear").size(CAPTION_SIZE)).on_press(Message::ClearUpload(slot)),
        ]
        .spacing(10)
        .into(),
        None => text("No file chosen (jpg, jpeg, png)").size(CAPTION_SIZE).color(MUTED_COLOR).into(),
    };

    column![
        text(slot.prompt()).size(BODY_SIZE),
        row![button("Browse files").on_press(Message::PickUpload(slot)), status].spacing(12),
    ]
    .spacing(6)
    .into()
}

fn upload_form<'a>(image: Option<String>, mask: Option<String>) -> Element<'a, Message> {
    column![
        upload_control(UploadSlot::Image, image),
        upload_control(UploadSlot::Mask, mask),
    ]
    .spacing(14)
    .into()
}

fn upload_preview<'a>(image: LoadedImage, mask: LoadedImage) -> Element<'a, Message> {
    column![
        row![
            Column::new()
                .width(Length::FillPortion(1))
                .push(captioned(image, UploadSlot::Image.caption().to_string())),
            Column::new()
                .width(Length::FillPortion(1))
                .push(captioned(mask, UploadSlot::Mask.caption().to_string())),
        ]
        .spacing(16),
        text(sections::UPLOAD_SUCCESS).size(BODY_SIZE),
    ]
    .spacing(10)
    .into()
}

fn model_output<'a>(
    kind: ModelKind,
    shape: (usize, usize, usize),
    rendered: LoadedImage,
) -> Element<'a, Message> {
    let (height, width, channels) = shape;

    column![
        captioned(rendered, kind.output_caption().to_string()),
        text(format!("Output shape: {} x {} x {}", height, width, channels))
            .size(CAPTION_SIZE)
            .color(MUTED_COLOR),
        text(kind.metrics_heading()).size(SUBHEADER_SIZE),
        text(kind.metric_line()).size(BODY_SIZE),
    ]
    .spacing(8)
    .into()
}

fn insights<'a>() -> Element<'a, Message> {
    let points: Vec<Element<'a, Message>> = sections::INSIGHTS_POINTS
        .iter()
        .map(|(label, detail)| text(format!("• {}: {}", label, detail)).size(BODY_SIZE).into())
        .collect();

    column![
        text(sections::INSIGHTS_TITLE).size(TITLE_SIZE),
        text(sections::INSIGHTS_BODY).size(BODY_SIZE),
        Column::with_children(points).spacing(6),
    ]
    .spacing(16)
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    column![
        horizontal_rule(1),
        text(sections::FOOTER_HEADING).size(SUBHEADER_SIZE),
        text(sections::FOOTER_BODY).size(BODY_SIZE),
    ]
    .spacing(10)
    .into()
}
