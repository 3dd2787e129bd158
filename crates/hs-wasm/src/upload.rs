//! Background image upload: validate the file type and inline the bytes
//! as a `data:` URL the page can use directly as an image source.

use base64::{Engine as _, engine::general_purpose};
use hs_core::BackgroundImage;
use thiserror::Error;

/// MIME types accepted for a background picture.
pub const ACCEPTED_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Errors that can occur while loading a background image.
#[derive(Error, Debug, PartialEq)]
pub enum UploadError {
    /// Anything other than JPEG or PNG.
    #[error("Please upload a JPG or PNG image file.")]
    UnsupportedType(String),

    /// Zero-byte file
    #[error("The selected file is empty.")]
    Empty,
}

pub type UploadResult<T> = Result<T, UploadError>;

pub fn is_accepted(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    ACCEPTED_TYPES.contains(&mime.as_str())
}

/// Encode an uploaded file as a background image reference.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> UploadResult<BackgroundImage> {
    if !is_accepted(mime) {
        return Err(UploadError::UnsupportedType(mime.to_string()));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    let mime = mime.trim().to_ascii_lowercase();
    let b64 = general_purpose::STANDARD.encode(bytes);
    Ok(BackgroundImage::new(format!("data:{mime};base64,{b64}")))
}
