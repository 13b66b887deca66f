//! Image upload encoding.
//!
//! One suspend-until-complete operation: read the file, sniff the format
//! from content, and produce the base64 payload for inlining. Any failure
//! here rejects the submission before a network call is attempted.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use helprx_common::InlineImage;

use crate::error::{HelpRxError, Result};

/// Read and encode an uploaded image.
///
/// The MIME type is sniffed from the file content, not the extension, so a
/// corrupt or non-image file fails with a descriptive `ImageRead` error.
pub async fn encode_image(path: &Path) -> Result<InlineImage> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| HelpRxError::ImageRead(format!("{}: {e}", path.display())))?;

    let format = image::guess_format(&bytes).map_err(|_| {
        HelpRxError::ImageRead(format!(
            "{}: not a recognized image format",
            path.display()
        ))
    })?;

    Ok(InlineImage {
        mime_type: format.to_mime_type().to_string(),
        data: STANDARD.encode(&bytes),
    })
}
