//! Port interface for image uploads

use async_trait::async_trait;
use aspire_domain::{ChatImage, UploadedImage};

/// Image upload endpoints
///
/// Upload failures are logged by the adapter and reported as `None`; callers
/// treat a missing image as "keep the old one".
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Replace the profile picture of `student_id`.
    async fn upload_profile_image(
        &self,
        bytes: Vec<u8>,
        extension: &str,
        student_id: &str,
    ) -> Option<UploadedImage>;

    /// Attach an image to the chat `chat_id`.
    async fn upload_chat_image(
        &self,
        bytes: Vec<u8>,
        extension: &str,
        chat_id: &str,
    ) -> Option<ChatImage>;
}
