//! Upload encoding.
//!
//! Wraps the browser's callback-style FileReader into a single
//! suspend-until-complete operation producing the inline image payload, or
//! a descriptive read error.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use helprx_common::InlineImage;

/// Extract the base64 data from a data URL.
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,/9j/4AAQ..." style data URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a data URL, defaulting to "image/jpeg".
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Read an uploaded file into an inline image payload.
///
/// Awaited fully before the network call is issued; a failed read rejects
/// the submission with a descriptive error.
pub async fn read_inline_image(file: &web_sys::File) -> Result<InlineImage, String> {
    let data_url = read_data_url(file).await?;

    let mime_type = extract_mime_type_from_data_url(&data_url).to_string();
    let data = extract_base64_from_data_url(&data_url)
        .ok_or_else(|| format!("failed to read {}: not a data URL", file.name()))?
        .to_string();

    Ok(InlineImage { mime_type, data })
}

async fn read_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new()
        .map_err(|_| "failed to create file reader".to_string())?;

    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let reader_for_closure = reader.clone();
    let file_name = file.name();
    let onloadend = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        // result() is null on failure, a data-URL string on success
        let outcome = match reader_for_closure.result() {
            Ok(value) => value
                .as_string()
                .ok_or_else(|| format!("failed to read {file_name}")),
            Err(_) => Err(format!("failed to read {file_name}")),
        };
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| format!("failed to start reading {}", file.name()))?;

    let outcome = rx
        .await
        .map_err(|_| "file read was interrupted".to_string())?;

    reader.set_onloadend(None);
    outcome
}
