//! Profile photo encoding.
//!
//! The backend takes the photo inline as a `data:<mime>;base64,<payload>`
//! string. The whole file is read into memory; there is no size limit.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Guess an image MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read `path` fully and return it as a data URI.
pub async fn read_as_data_uri(path: &Path) -> std::io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(encode_data_uri(&bytes, mime_for_path(path)))
}
