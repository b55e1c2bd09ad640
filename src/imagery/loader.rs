/// Image loader
///
/// Bundled assets (the home illustration and the three test samples) are
/// read from disk; uploads arrive as a path picked in the file dialog and
/// are read then validated before decoding. Decoding is CPU-bound, so the
/// async entry points push it onto the blocking pool.

use image::ImageFormat;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{DashboardError, Result};
use crate::state::data::LoadedImage;

/// Extensions accepted by both upload controls
pub const UPLOAD_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Load a bundled asset from disk
///
/// # Returns
/// * `Ok(LoadedImage)` - Decoded image
/// * `Err(String)` - "asset unavailable: ..." message for the UI
pub async fn load_asset(path: PathBuf, max_side: u32) -> std::result::Result<LoadedImage, String> {
    task::spawn_blocking(move || load_asset_blocking(&path, max_side).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of asset loading
pub fn load_asset_blocking(path: &Path, max_side: u32) -> Result<LoadedImage> {
    let bytes = std::fs::read(path).map_err(|source| DashboardError::AssetUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| DashboardError::AssetUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let name = display_name(path);
    tracing::info!("🖼️  Loaded asset {} ({}x{})", name, decoded.width(), decoded.height());

    Ok(LoadedImage::new(name, decoded.into_rgba8(), max_side))
}

/// Read and decode an uploaded file
pub async fn read_upload(path: PathBuf, max_side: u32) -> std::result::Result<LoadedImage, String> {
    let name = display_name(&path);

    // Reject by extension before touching the file
    check_extension(&name).map_err(|e| e.to_string())?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| DashboardError::UploadRead { name: name.clone(), source }.to_string())?;

    task::spawn_blocking(move || decode_upload(&name, &bytes, max_side).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Validate and decode uploaded bytes.
///
/// Only PNG and JPEG content with a matching extension is accepted.
pub fn decode_upload(name: &str, bytes: &[u8], max_side: u32) -> Result<LoadedImage> {
    check_extension(name)?;

    let format = image::guess_format(bytes).map_err(|source| DashboardError::CorruptUpload {
        name: name.to_string(),
        source,
    })?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(DashboardError::UnsupportedUpload { name: name.to_string() });
    }

    let decoded = image::load_from_memory_with_format(bytes, format).map_err(|source| {
        DashboardError::CorruptUpload {
            name: name.to_string(),
            source,
        }
    })?;

    tracing::info!("📤 Decoded upload {} ({}x{})", name, decoded.width(), decoded.height());
    Ok(LoadedImage::new(name, decoded.into_rgba8(), max_side))
}

fn check_extension(name: &str) -> Result<()> {
    let extension = Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension {
        Some(ext) if UPLOAD_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(DashboardError::UnsupportedUpload { name: name.to_string() }),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(pixels)
            .to_rgb8()
            .write_to(&mut Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    #[test]
    fn test_load_asset_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_image1.png");
        std::fs::write(&path, encoded(8, 4, ImageFormat::Png)).unwrap();

        let image = load_asset_blocking(&path, 1280).unwrap();

        assert_eq!(image.name, "test_image1.png");
        assert_eq!((image.width(), image.height()), (8, 4));
    }

    #[test]
    fn test_missing_asset_is_unavailable() {
        let err = load_asset_blocking(Path::new("/nonexistent/test_image1.jpg"), 1280).unwrap_err();
        assert!(matches!(err, DashboardError::AssetUnavailable { .. }));
        assert!(err.to_string().contains("asset unavailable"));
    }

    #[test]
    fn test_garbage_asset_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_asset_blocking(&path, 1280).unwrap_err();
        assert!(matches!(err, DashboardError::AssetUnreadable { .. }));
    }

    #[test]
    fn test_decode_upload_accepts_png_and_jpeg() {
        let png = decode_upload("tile.png", &encoded(16, 8, ImageFormat::Png), 1280).unwrap();
        assert_eq!((png.width(), png.height()), (16, 8));

        let jpeg = decode_upload("tile.JPEG", &encoded(16, 8, ImageFormat::Jpeg), 1280).unwrap();
        assert_eq!((jpeg.width(), jpeg.height()), (16, 8));
    }

    #[test]
    fn test_decode_upload_rejects_other_extensions() {
        let err = decode_upload("tile.gif", &encoded(4, 4, ImageFormat::Png), 1280).unwrap_err();
        assert!(matches!(err, DashboardError::UnsupportedUpload { .. }));
    }

    #[test]
    fn test_decode_upload_rejects_mismatched_content() {
        let err = decode_upload("tile.png", &encoded(4, 4, ImageFormat::Bmp), 1280).unwrap_err();
        assert!(err.to_string().starts_with("unsupported or corrupt file"));
    }

    #[test]
    fn test_decode_upload_rejects_corrupt_bytes() {
        let err = decode_upload("tile.jpg", b"\xff\xd8\xff garbage", 1280).unwrap_err();
        assert!(matches!(err, DashboardError::CorruptUpload { .. }));
    }

    #[tokio::test]
    async fn test_read_upload_missing_file() {
        let err = read_upload(PathBuf::from("/nonexistent/mask.png"), 1280)
            .await
            .unwrap_err();
        assert!(err.starts_with("unsupported or corrupt file"));
        assert!(err.contains("mask.png"));
    }

    #[tokio::test]
    async fn test_read_upload_round_trip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        std::fs::write(&path, encoded(12, 6, ImageFormat::Png)).unwrap();

        let image = read_upload(path, 1280).await.unwrap();
        assert_eq!(image.name, "mask.png");
        assert_eq!((image.width(), image.height()), (12, 6));
    }
}
