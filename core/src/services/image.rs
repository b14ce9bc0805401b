// furncart/src/services/image.rs

use crate::error::{Result, ShopError};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use std::path::Path;
use tracing::debug;

/// Renders bytes as a self-describing `data:` URL.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
  format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(bytes))
}

/// Reads a local room picture and returns it as a data URL. The MIME type is
/// guessed from the extension.
pub async fn encode_image_file(path: &Path) -> Result<String> {
  let bytes = tokio::fs::read(path).await.map_err(|source| ShopError::Image {
    path: path.display().to_string(),
    source,
  })?;
  let mime_type = mime_guess::from_path(path).first_or_octet_stream();
  debug!(path = %path.display(), %mime_type, size = bytes.len(), "Encoded room image.");
  Ok(to_data_url(mime_type.essence_str(), &bytes))
}
