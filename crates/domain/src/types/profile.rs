//! Student profile types
//!
//! `ProfileRecord` is the client-side cache of the signed-in student's profile;
//! `ServerProfileRecord` is the copy the profile server holds. Both share one
//! wire shape: a flat JSON object whose absent fields are omitted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::preferences::{FontStyle, SupportedLocale, ThemeMode};

/// Every field a profile record can carry, in wire order.
pub const PROFILE_FIELD_NAMES: [&str; 15] = [
    "student_id",
    "first_name",
    "preferred_name",
    "last_name",
    "email_address",
    "native_language",
    "preferred_language",
    "student_since",
    "theme_mode",
    "font_style",
    "profile_picture_url",
    "profile_picture_path",
    "time_zone",
    "lessons_remaining",
    "lessons_completed",
];

/// Value of a single present profile field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Text(String),
    Count(i64),
}

/// Present fields of a record keyed by wire name.
pub type ProfileFields = BTreeMap<&'static str, FieldValue>;

/// Client-local profile record. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_since: Option<String>,
    /// Raw wire value; see [`ProfileRecord::theme_mode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<String>,
    /// Raw wire value; see [`ProfileRecord::font_style`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_completed: Option<i64>,
}

impl ProfileRecord {
    /// Present fields keyed by wire name.
    ///
    /// Two records are "in sync" exactly when their field maps are equal: the
    /// same number of keys and pairwise-equal values.
    pub fn fields(&self) -> ProfileFields {
        let mut fields = ProfileFields::new();
        let texts = [
            ("student_id", &self.student_id),
            ("first_name", &self.first_name),
            ("preferred_name", &self.preferred_name),
            ("last_name", &self.last_name),
            ("email_address", &self.email_address),
            ("native_language", &self.native_language),
            ("preferred_language", &self.preferred_language),
            ("student_since", &self.student_since),
            ("theme_mode", &self.theme_mode),
            ("font_style", &self.font_style),
            ("profile_picture_url", &self.profile_picture_url),
            ("profile_picture_path", &self.profile_picture_path),
            ("time_zone", &self.time_zone),
        ];
        for (name, value) in texts {
            if let Some(value) = value {
                fields.insert(name, FieldValue::Text(value.clone()));
            }
        }
        let counts =
            [("lessons_remaining", self.lessons_remaining), ("lessons_completed", self.lessons_completed)];
        for (name, value) in counts {
            if let Some(value) = value {
                fields.insert(name, FieldValue::Count(value));
            }
        }
        fields
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Non-empty student identifier, if assigned.
    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Non-empty email address, if present.
    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref().filter(|email| !email.is_empty())
    }

    /// Typed theme; `None` when absent, empty or unrecognised.
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        self.theme_mode.as_deref().and_then(ThemeMode::from_wire)
    }

    /// Typed font; `None` when absent, empty or unrecognised.
    pub fn font_style(&self) -> Option<FontStyle> {
        self.font_style.as_deref().and_then(FontStyle::from_wire)
    }

    /// Locale derived from `preferred_language`, if one is set.
    pub fn preferred_locale(&self) -> Option<SupportedLocale> {
        self.preferred_language
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(SupportedLocale::from_code)
    }
}

/// Authoritative profile record as held by the profile server.
///
/// The server is expected to populate every field; when it does not, the
/// record is still authoritative and [`missing_fields`](Self::missing_fields)
/// reports the gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerProfileRecord(ProfileRecord);

impl ServerProfileRecord {
    pub fn new(record: ProfileRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.0
    }

    pub fn into_record(self) -> ProfileRecord {
        self.0
    }

    pub fn fields(&self) -> ProfileFields {
        self.0.fields()
    }

    /// Field names the server left out.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = self.fields();
        PROFILE_FIELD_NAMES.iter().copied().filter(|name| !present.contains_key(name)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl From<ProfileRecord> for ServerProfileRecord {
    fn from(record: ProfileRecord) -> Self {
        Self(record)
    }
}

/// Partial update pushed to `PUT /students/update`.
///
/// `student_id` and `email_address` are mandatory; the store refuses to send a
/// request where either is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub student_id: String,
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_remaining: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_completed: Option<i64>,
}

impl ProfileUpdateRequest {
    pub fn new(student_id: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            email_address: email_address.into(),
            ..Self::default()
        }
    }

    /// Name of the first mandatory field that is empty, if any.
    pub fn missing_identity(&self) -> Option<&'static str> {
        if self.student_id.trim().is_empty() {
            Some("student_id")
        } else if self.email_address.trim().is_empty() {
            Some("email_address")
        } else {
            None
        }
    }

    /// Apply the patch on top of `record`, returning the merged record.
    ///
    /// Used to build the proposed local record after a settings change.
    pub fn apply_to(&self, record: &ProfileRecord) -> ProfileRecord {
        let mut merged = record.clone();
        merged.student_id = Some(self.student_id.clone());
        merged.email_address = Some(self.email_address.clone());
        let overrides = [
            (&mut merged.preferred_name, &self.preferred_name),
            (&mut merged.preferred_language, &self.preferred_language),
            (&mut merged.theme_mode, &self.theme_mode),
            (&mut merged.font_style, &self.font_style),
            (&mut merged.profile_picture_url, &self.profile_picture_url),
            (&mut merged.profile_picture_path, &self.profile_picture_path),
            (&mut merged.time_zone, &self.time_zone),
        ];
        for (slot, value) in overrides {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
        if self.lessons_remaining.is_some() {
            merged.lessons_remaining = self.lessons_remaining;
        }
        if self.lessons_completed.is_some() {
            merged.lessons_completed = self.lessons_completed;
        }
        merged
    }
}
