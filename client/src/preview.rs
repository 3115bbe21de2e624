//! Data URI rendering for the local image preview.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Media type browsers report for files of unknown type.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode file contents as `data:<mime>;base64,<payload>`.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime_type.trim()
    };

    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
