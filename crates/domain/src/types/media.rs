//! Image upload responses

use serde::{Deserialize, Serialize};

/// Response of the profile picture upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Response of the chat image upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatImage {
    pub image_url: String,
    pub thumbnail_url: String,
}
