//! Image upload endpoints

use async_trait::async_trait;
use aspire_core::media::{chat_image_name, image_field_name, profile_image_name};
use aspire_core::ImageUploader;
use aspire_domain::constants::{CHAT_IMAGE_PATH, STUDENT_IMAGE_PATH};
use aspire_domain::{ChatImage, UploadedImage};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::{error, info, instrument};

use super::client::RestClient;

/// [`ImageUploader`] for profile pictures (main server) and chat images
/// (chat uploads server)
pub struct HttpImageUploader {
    main: RestClient,
    chat: RestClient,
}

impl HttpImageUploader {
    pub fn new(main: RestClient, chat: RestClient) -> Self {
        Self { main, chat }
    }
}

fn image_form(bytes: Vec<u8>, extension: &str, file_name: String) -> Form {
    Form::new().part(image_field_name(extension), Part::bytes(bytes).file_name(file_name))
}

#[async_trait]
impl ImageUploader for HttpImageUploader {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload_profile_image(
        &self,
        bytes: Vec<u8>,
        extension: &str,
        student_id: &str,
    ) -> Option<UploadedImage> {
        let form = image_form(bytes, extension, profile_image_name(student_id, extension));

        match self.main.send_multipart(Method::PUT, STUDENT_IMAGE_PATH, form).await {
            Ok(uploaded) => {
                info!("Profile image uploaded");
                Some(uploaded)
            }
            Err(err) => {
                error!(error = %err, "Error uploading image");
                None
            }
        }
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload_chat_image(
        &self,
        bytes: Vec<u8>,
        extension: &str,
        chat_id: &str,
    ) -> Option<ChatImage> {
        let form = image_form(bytes, extension, chat_image_name(chat_id, extension));

        match self.chat.send_multipart(Method::POST, CHAT_IMAGE_PATH, form).await {
            Ok(image) => {
                info!("Chat image uploaded");
                Some(image)
            }
            Err(err) => {
                error!(error = %err, "Error uploading image");
                None
            }
        }
    }
}
