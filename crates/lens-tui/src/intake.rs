//! File intake — validation of candidate images and preview decoding.
//!
//! Validation order matches the service contract: declared media type first,
//! then the size cap.  A rejected candidate changes no state; the caller
//! only raises a toast.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use thiserror::Error;

/// Longest preview edge in pixels.  Kept small; the pane samples down
/// further to its own cell grid at draw time.
const PREVIEW_MAX_EDGE: u32 = 128;

/// The currently selected image.  At most one exists, owned by the App.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    /// Declared media type, derived from the file extension.
    pub mime: &'static str,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

/// Downscaled RGB pixel grid for half-block rendering.
#[derive(Debug, Clone)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<[u8; 3]>,
}

impl PreviewPixels {
    /// Nearest-sample a pixel; out-of-range coordinates clamp to the edge.
    pub fn sample(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        self.rgb[(y * self.width + x) as usize]
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("please select an image file")]
    NotAnImage,
    #[error("file is too large (max {max_mib} MiB)")]
    TooLarge { max_mib: u64 },
    #[error("cannot read file: {0}")]
    Unreadable(String),
}

/// Declared media type for an image extension.  Unknown extensions are not
/// images as far as intake is concerned.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// True when the path's declared type begins with `image/`.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .is_some()
}

/// Validate and load a candidate file.
///
/// 1. Declared media type must be an image type, else `NotAnImage`.
/// 2. Size must not exceed `max_bytes`, else `TooLarge`.
///
/// On acceptance the payload is read into memory so the analysis request
/// can be built without touching the disk again.
pub fn load_selected(path: &Path, max_bytes: u64) -> Result<SelectedFile, IntakeError> {
    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .ok_or(IntakeError::NotAnImage)?;

    let meta = std::fs::metadata(path).map_err(|e| IntakeError::Unreadable(e.to_string()))?;
    let size_bytes = meta.len();
    if size_bytes > max_bytes {
        return Err(IntakeError::TooLarge {
            max_mib: max_bytes / (1024 * 1024),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| IntakeError::Unreadable(e.to_string()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(SelectedFile {
        path: path.to_path_buf(),
        name,
        mime,
        size_bytes,
        bytes,
    })
}

/// Decode the payload into a small RGB grid for the preview pane.
/// CPU-bound; callers run it on a blocking thread.
pub fn decode_preview(bytes: &[u8]) -> Result<PreviewPixels, String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let img = if img.width() > PREVIEW_MAX_EDGE || img.height() > PREVIEW_MAX_EDGE {
        img.resize(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE, FilterType::Triangle)
    } else {
        img
    };
    let rgb8 = img.to_rgb8();
    let (width, height) = (rgb8.width(), rgb8.height());
    let rgb = rgb8.pixels().map(|p| [p[0], p[1], p[2]]).collect();
    Ok(PreviewPixels { width, height, rgb })
}

/// Human-readable size for the preview metadata line.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const MAX: u64 = 10 * 1024 * 1024;

    fn write_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn non_image_types_are_rejected() {
        let dir = TempDir::new().unwrap();
        for name in ["notes.txt", "invoice.pdf", "archive.zip", "noext"] {
            let path = write_file(&dir, name, 16);
            assert_eq!(
                load_selected(&path, MAX).unwrap_err(),
                IntakeError::NotAnImage,
                "{}",
                name
            );
        }
    }

    #[test]
    fn oversized_files_are_rejected_regardless_of_type() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "big.png", (MAX + 1) as usize);
        assert_eq!(
            load_selected(&path, MAX).unwrap_err(),
            IntakeError::TooLarge { max_mib: 10 }
        );
    }

    #[test]
    fn exactly_at_the_cap_is_accepted() {
        let dir = TempDir::new().unwrap();
        let cap = 4 * 1024;
        let path = write_file(&dir, "edge.jpg", cap as usize);
        let file = load_selected(&path, cap).unwrap();
        assert_eq!(file.size_bytes, cap);
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.bytes.len(), cap as usize);
        assert_eq!(file.name, "edge.jpg");
    }

    #[test]
    fn extension_case_does_not_matter() {
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("Png"), Some("image/png"));
        assert_eq!(mime_for_extension("rs"), None);
    }

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb(color));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut buf),
                image::ImageFormat::Png,
            )
            .unwrap();
        buf
    }

    #[test]
    fn preview_decode_samples_pixels() {
        let pixels = decode_preview(&png_bytes(2, 2, [200, 10, 30])).unwrap();
        assert_eq!((pixels.width, pixels.height), (2, 2));
        assert_eq!(pixels.sample(0, 0), [200, 10, 30]);
        // Clamped sampling never panics.
        assert_eq!(pixels.sample(99, 99), [200, 10, 30]);
    }

    #[test]
    fn preview_decode_bounds_large_images() {
        let pixels = decode_preview(&png_bytes(512, 128, [0, 0, 0])).unwrap();
        assert!(pixels.width <= 128 && pixels.height <= 128);
        // Aspect ratio survives the downscale.
        assert_eq!(pixels.width, 128);
        assert_eq!(pixels.height, 32);
    }

    #[test]
    fn preview_decode_rejects_garbage() {
        assert!(decode_preview(&[0u8; 64]).is_err());
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
