//! Data URL encoding of local files.

use crate::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;
use tracing::debug;

/// MIME type guessed from the file extension.
pub fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads the whole file and resolves to its data URL. Either the full
/// contents are encoded or a single read error is returned.
pub async fn read_as_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::file(path.display().to_string(), e.to_string()))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(encode_data_url(mime_type(path), &bytes))
}

/// Accepts `data:<mime>;base64,<payload>` or a bare base64 payload.
pub fn decode_data_url(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let payload = if trimmed.starts_with("data:") {
        match trimmed.split_once(',') {
            Some((_, payload)) => payload,
            None => return Err(Error::data_url("missing ',' after data URL header")),
        }
    } else {
        trimmed
    };

    STANDARD
        .decode(payload)
        .map_err(|e| Error::data_url(e.to_string()))
}
