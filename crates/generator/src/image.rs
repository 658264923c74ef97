use base64::Engine;
use log::{debug, warn};
use startpage_core::{Error, Result};
use std::fs;
use std::path::Path;

/// MIME type used when the extension is not recognized
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess a MIME type from the file extension.
pub fn mime_type(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}

/// Read an image and encode it as a `data:` URL.
///
/// The whole file is read into memory; no size limit is enforced.
pub fn image_to_data_url(path: &Path) -> Result<String> {
    let mime = mime_type(path).unwrap_or_else(|| {
        warn!(
            "Could not guess the type of {}, using {}",
            path.display(),
            FALLBACK_MIME
        );
        FALLBACK_MIME
    });

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    debug!(
        "Encoded {} ({} bytes) as {}",
        path.display(),
        bytes.len(),
        mime
    );

    Ok(format!("data:{};base64,{}", mime, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// 1×1 transparent PNG
    const PIXEL_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_png_data_url_round_trips_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pixel.png");
        fs::write(&path, PIXEL_PNG).unwrap();

        let url = image_to_data_url(&path).unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert!(!payload.is_empty());

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(decoded, PIXEL_PNG);
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(mime_type(Path::new("a.png")), Some("image/png"));
        assert_eq!(mime_type(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type(Path::new("a.svg")), Some("image/svg+xml"));
        assert_eq!(mime_type(Path::new("a.gif")), Some("image/gif"));
        assert_eq!(mime_type(Path::new("no-extension")), None);
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("picture.unknownext");
        fs::write(&path, b"bytes").unwrap();

        let url = image_to_data_url(&path).unwrap();
        assert_eq!(url, "data:application/octet-stream;base64,Ynl0ZXM=");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = image_to_data_url(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
