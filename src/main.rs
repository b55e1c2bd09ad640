use iced::widget::{column, container, row, scrollable, Column};
use iced::{Element, Length, Size, Task, Theme};
use rfd::FileDialog;

mod color;
mod config;
mod error;
mod imagery;
mod predict;
mod state;
mod ui;

use config::Settings;
use imagery::loader;
use predict::{Predictor, RandomPredictor};
use state::data::{LoadedImage, ModelKind, Page, UploadSlot};
use state::session::SessionState;
use ui::sections::AssetView;

/// Main application state
struct Dashboard {
    /// Startup settings, fixed for the life of the app
    settings: Settings,
    /// Everything the user has selected, uploaded or run
    session: SessionState,
    /// Home page illustration
    home_image: AssetView,
    /// Stand-in for the height / segmentation models
    predictor: Box<dyn Predictor>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a page in the sidebar
    PageSelected(Page),
    /// User picked a model type on the Predictions page
    ModelSelected(ModelKind),
    /// User clicked one of the sample buttons
    SampleClicked(usize),
    /// Background sample load finished
    SampleLoaded {
        visit: u64,
        index: usize,
        result: Result<LoadedImage, String>,
    },
    /// User clicked "Browse files" on an upload control
    PickUpload(UploadSlot),
    /// Background upload decode finished
    UploadLoaded {
        visit: u64,
        slot: UploadSlot,
        result: Result<LoadedImage, String>,
    },
    ClearUpload(UploadSlot),
    RunModel,
    HomeImageLoaded(Result<LoadedImage, String>),
}

impl Dashboard {
    /// Create a new instance of the application and start loading the home illustration
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let home_path = settings.home_image_path();
        let max_side = settings.preview_max_side;
        let session = SessionState::new(max_side);

        tracing::info!("🛰️  Dashboard starting, assets from {}", settings.asset_dir.display());

        (
            Dashboard {
                settings,
                session,
                home_image: AssetView::Loading,
                predictor: Box::new(RandomPredictor::new()),
            },
            Task::perform(loader::load_asset(home_path, max_side), Message::HomeImageLoaded),
        )
    }

    fn title(&self) -> String {
        self.settings.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageSelected(page) => {
                self.session.navigate(page);
                Task::none()
            }
            Message::ModelSelected(kind) => {
                self.session.select_model(kind);
                Task::none()
            }
            Message::SampleClicked(index) => {
                let Some(path) = self.settings.sample_path(index) else {
                    return Task::none();
                };
                tracing::info!("Loading sample {} from {}", index + 1, path.display());

                let visit = self.session.visit();
                Task::perform(
                    loader::load_asset(path, self.settings.preview_max_side),
                    move |result| Message::SampleLoaded { visit, index, result },
                )
            }
            Message::SampleLoaded { visit, index, result } => {
                if !self.session.is_current(visit) {
                    tracing::debug!("Dropping stale sample load {}", index);
                    return Task::none();
                }
                match result {
                    Ok(image) => self.session.sample_loaded(index, image),
                    Err(message) => self.session.sample_failed(message),
                }
                Task::none()
            }
            Message::PickUpload(slot) => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title(slot.prompt())
                    .add_filter("Images", &loader::UPLOAD_EXTENSIONS)
                    .pick_file();

                if let Some(path) = picked {
                    tracing::info!("Reading {:?} upload from {}", slot, path.display());
                    let visit = self.session.visit();
                    return Task::perform(
                        loader::read_upload(path, self.settings.preview_max_side),
                        move |result| Message::UploadLoaded { visit, slot, result },
                    );
                }

                Task::none()
            }
            Message::UploadLoaded { visit, slot, result } => {
                if !self.session.is_current(visit) {
                    tracing::debug!("Dropping stale {:?} upload", slot);
                    return Task::none();
                }
                match result {
                    Ok(image) => self.session.upload_loaded(slot, image),
                    Err(message) => self.session.upload_failed(slot, message),
                }
                Task::none()
            }
            Message::ClearUpload(slot) => {
                self.session.clear_upload(slot);
                Task::none()
            }
            Message::RunModel => {
                if !self.session.run_model(self.predictor.as_mut()) {
                    tracing::debug!("Run Model ignored: nothing selected");
                }
                Task::none()
            }
            Message::HomeImageLoaded(result) => {
                self.home_image = match result {
                    Ok(image) => AssetView::Ready(image),
                    Err(message) => {
                        tracing::error!("❌ Home illustration missing: {}", message);
                        AssetView::Unavailable(message)
                    }
                };
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let sections = ui::sections::sections(&self.session, &self.home_image, &self.settings.samples);

        let page: Column<Message> = Column::with_children(sections.into_iter().map(ui::view::render))
            .spacing(28)
            .padding(40)
            .max_width(1200);

        row![
            ui::sidebar::sidebar(&self.settings.sidebar_title, self.session.page),
            container(scrollable(column![page].width(Length::Fill)))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let settings = Settings::load().unwrap_or_else(|err| {
        tracing::warn!("⚠️  {}; using default settings", error::DashboardError::from(err));
        Settings::default()
    });
    let (width, height) = settings.layout.window_size();

    iced::application(Dashboard::title, Dashboard::update, Dashboard::view)
        .theme(Dashboard::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || Dashboard::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn sample(name: &str) -> LoadedImage {
        LoadedImage::new(name, RgbaImage::new(16, 16), 1280)
    }

    fn dashboard_on_predictions() -> Dashboard {
        let (mut dashboard, _) = Dashboard::new(Settings::default());
        let _ = dashboard.update(Message::PageSelected(Page::Predictions));
        dashboard
    }

    #[test]
    fn test_sample_load_from_earlier_visit_is_ignored() {
        let mut dashboard = dashboard_on_predictions();
        let stale_visit = dashboard.session.visit();

        let _ = dashboard.update(Message::PageSelected(Page::Insights));
        let _ = dashboard.update(Message::PageSelected(Page::Predictions));
        let _ = dashboard.update(Message::SampleLoaded {
            visit: stale_visit,
            index: 0,
            result: Ok(sample("test_image1.jpg")),
        });

        assert!(dashboard.session.predictions.active.is_none());
    }

    #[test]
    fn test_upload_from_earlier_visit_is_ignored() {
        let mut dashboard = dashboard_on_predictions();
        let stale_visit = dashboard.session.visit();

        let _ = dashboard.update(Message::PageSelected(Page::Home));
        let _ = dashboard.update(Message::PageSelected(Page::Predictions));
        let _ = dashboard.update(Message::UploadLoaded {
            visit: stale_visit,
            slot: UploadSlot::Image,
            result: Ok(sample("tile.png")),
        });

        assert!(dashboard.session.predictions.uploaded_image.is_none());
    }

    #[test]
    fn test_current_sample_load_then_run() {
        let mut dashboard = dashboard_on_predictions();
        let visit = dashboard.session.visit();

        let _ = dashboard.update(Message::SampleLoaded {
            visit,
            index: 2,
            result: Ok(sample("test_image3.jpg")),
        });
        let _ = dashboard.update(Message::RunModel);

        let predictions = &dashboard.session.predictions;
        assert_eq!(predictions.active.as_ref().and_then(|a| a.sample_index()), Some(2));
        assert_eq!(predictions.output.as_ref().unwrap().output.shape(), (16, 16, 3));
    }
}
