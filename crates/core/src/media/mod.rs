//! Object naming for uploaded images

pub mod ports;

use uuid::Uuid;

/// Storage object name for a student's profile picture.
///
/// One object per student, so re-uploading overwrites the previous picture.
pub fn profile_image_name(student_id: &str, extension: &str) -> String {
    format!("{}.{extension}", student_id.replace('-', "_"))
}

/// Storage object name for a new chat image. Unique per call.
pub fn chat_image_name(chat_id: &str, extension: &str) -> String {
    let suffix = Uuid::new_v4().to_string().replace('-', "_");
    format!("{}__{suffix}.{extension}", chat_id.replace('-', "_"))
}

/// Multipart field name the upload endpoints expect for an image.
pub fn image_field_name(extension: &str) -> String {
    format!("image/{extension}")
}
