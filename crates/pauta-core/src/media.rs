//! Data-URI helpers for attached images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_WEBP: &str = "image/webp";

/// Encode raw image bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Infer the MIME type from a data-URI prefix. Anything that is not
/// recognisably PNG or WebP is sent as JPEG.
pub fn infer_mime_type(image: &str) -> &'static str {
    if image.starts_with("data:image/png") {
        MIME_PNG
    } else if image.starts_with("data:image/webp") {
        MIME_WEBP
    } else {
        MIME_JPEG
    }
}

/// Strip the data-URI prefix and return the raw base64 payload.
///
/// Returns `None` when there is no comma-separated payload to extract.
pub fn payload_of(image: &str) -> Option<&str> {
    let (_, rest) = image.split_once(',')?;
    let payload = rest.split(',').next().unwrap_or(rest);
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}
