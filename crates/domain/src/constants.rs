//! Application constants
//!
//! Centralized location for domain-level constants shared by the core and
//! infrastructure crates.

/// Storage key under which the serialized profile blob is kept.
pub const PROFILE_STORAGE_KEY: &str = "studentInfo";

// Remote endpoint paths (main server)
pub const STUDENT_PATH: &str = "/student";
pub const STUDENT_ID_QUERY: &str = "studentID";
pub const STUDENT_UPDATE_PATH: &str = "/students/update";
pub const STUDENT_IMAGE_PATH: &str = "/students/update/image";
pub const VALIDATE_REGISTRATION_PATH: &str = "/validate/registration";
pub const VALIDATE_LOGIN_PATH: &str = "/validate/login";

// Remote endpoint paths (auxiliary servers)
pub const HASH_PATH: &str = "/hash";
pub const CHAT_IMAGE_PATH: &str = "/chats/upload/image";

/// JSON content type used by every JSON request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
