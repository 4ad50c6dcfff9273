//! Inline image payloads for self-contained HTML output.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image data is empty")]
    Empty,
    #[error("unrecognized image format: {0}")]
    UnknownFormat(#[from] image::ImageError),
}

/// An image ready to be referenced from markup as a `data:` URI.
///
/// The source bytes are carried through untouched; only the format is
/// sniffed from the leading magic bytes to pick the MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    mime_type: &'static str,
    base64: String,
}

impl EmbeddedImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::Empty);
        }
        let format = image::guess_format(bytes)?;
        Ok(Self {
            mime_type: format.to_mime_type(),
            base64: STANDARD.encode(bytes),
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Base64 payload without the `data:` prefix.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0";
    const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn sniffs_common_formats() {
        let cases = [
            (PNG_HEADER, "image/png"),
            (JPEG_HEADER, "image/jpeg"),
            (GIF_HEADER, "image/gif"),
        ];
        for (bytes, mime) in cases {
            let image = EmbeddedImage::from_bytes(bytes).unwrap();
            assert_eq!(image.mime_type(), mime);
        }
    }

    #[test]
    fn data_uri_round_trips_payload() {
        let image = EmbeddedImage::from_bytes(PNG_HEADER).unwrap();
        let uri = image.data_uri();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(payload, image.base64());
        assert_eq!(STANDARD.decode(payload).unwrap(), PNG_HEADER);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            EmbeddedImage::from_bytes(&[]),
            Err(AssetError::Empty)
        ));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = EmbeddedImage::from_bytes(b"definitely not a picture").unwrap_err();
        assert!(matches!(err, AssetError::UnknownFormat(_)));
    }
}
