//! Startup settings
//!
//! Settings are read once from `<config_dir>/height-seg-dashboard/config.json`
//! and never change while the app runs. Every field has a default, so a
//! partial file (or no file at all) is fine.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `asset_dir`
pub const ASSET_DIR_ENV: &str = "HSD_ASSET_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Window layout, mirrors the "wide" / "centered" page layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    /// Initial window size in logical pixels
    pub fn window_size(self) -> (f32, f32) {
        match self {
            Layout::Wide => (1440.0, 900.0),
            Layout::Centered => (960.0, 900.0),
        }
    }
}

/// A named sample image from the test set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAsset {
    pub name: String,
    pub path: PathBuf,
}

impl SampleAsset {
    fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Heading at the top of the navigation sidebar
    pub sidebar_title: String,
    pub layout: Layout,
    /// Directory that relative asset paths are resolved against
    pub asset_dir: PathBuf,
    /// Illustration shown on the Home page
    pub home_image: PathBuf,
    /// Exactly three samples, one button each
    pub samples: [SampleAsset; 3],
    /// Longest side of on-screen previews, in pixels
    pub preview_max_side: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Height Segmentation Model".to_string(),
            sidebar_title: "Height Segmentation App".to_string(),
            layout: Layout::Wide,
            asset_dir: PathBuf::from("."),
            home_image: PathBuf::from("sample.png"),
            samples: [
                SampleAsset::new("Sample Image 1", "test_image1.jpg"),
                SampleAsset::new("Sample Image 2", "test_image2.jpg"),
                SampleAsset::new("Sample Image 3", "test_image3.jpg"),
            ],
            preview_max_side: 1280,
        }
    }
}

impl Settings {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("height-seg-dashboard"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load settings from the user's config directory.
    ///
    /// A missing file is not an error. A file that exists but can't be
    /// read or parsed is reported so the caller can decide to fall back.
    pub fn load() -> Result<Settings, ConfigError> {
        let mut settings = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Settings::default(),
        };

        settings.apply_env(env::var(ASSET_DIR_ENV).ok());
        Ok(settings)
    }

    /// Apply the `HSD_ASSET_DIR` value, if set and non-empty
    fn apply_env(&mut self, asset_dir: Option<String>) {
        if let Some(dir) = asset_dir.filter(|dir| !dir.is_empty()) {
            self.asset_dir = PathBuf::from(dir);
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve an asset path against `asset_dir`; absolute paths pass through
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_dir.join(path)
        }
    }

    pub fn home_image_path(&self) -> PathBuf {
        self.resolve(&self.home_image)
    }

    /// Resolved path of the sample at `index`, if there is one
    pub fn sample_path(&self, index: usize) -> Option<PathBuf> {
        self.samples.get(index).map(|sample| self.resolve(&sample.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_bundled_assets() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Height Segmentation Model");
        assert_eq!(settings.layout, Layout::Wide);
        assert_eq!(settings.samples[0].name, "Sample Image 1");
        assert_eq!(settings.samples[2].path, PathBuf::from("test_image3.jpg"));
        assert_eq!(settings.home_image_path(), PathBuf::from("./sample.png"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "asset_dir": "/srv/assets", "layout": "centered" }}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.asset_dir, PathBuf::from("/srv/assets"));
        assert_eq!(settings.layout, Layout::Centered);
        assert_eq!(settings.preview_max_side, 1280);
        assert_eq!(
            settings.sample_path(1),
            Some(PathBuf::from("/srv/assets/test_image2.jpg"))
        );
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = Settings::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_sample_count_is_fixed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "samples": [{{ "name": "only", "path": "a.jpg" }}] }}"#).unwrap();

        assert!(Settings::load_from(file.path()).is_err());
    }

    #[test]
    fn test_asset_dir_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "asset_dir": "/srv/assets" }}"#).unwrap();

        let mut settings = Settings::load_from(file.path()).unwrap();
        settings.apply_env(Some("/data/tiles".to_string()));

        assert_eq!(settings.asset_dir, PathBuf::from("/data/tiles"));
        assert_eq!(settings.home_image_path(), PathBuf::from("/data/tiles/sample.png"));
    }

    #[test]
    fn test_empty_asset_dir_env_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(Some(String::new()));
        assert_eq!(settings.asset_dir, PathBuf::from("."));

        settings.apply_env(None);
        assert_eq!(settings.asset_dir, PathBuf::from("."));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let settings = Settings::default();
        assert_eq!(settings.resolve(Path::new("/tmp/x.png")), PathBuf::from("/tmp/x.png"));
        assert_eq!(settings.sample_path(3), None);
    }
}
