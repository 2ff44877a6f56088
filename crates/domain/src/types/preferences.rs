//! Presentation preferences carried on the profile record
//!
//! The record stores these as raw strings (the server may send an empty
//! theme); the typed enums here are what the presentation layer applies.

use serde::{Deserialize, Serialize};

use crate::impl_wire_string_conversions;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl_wire_string_conversions!(ThemeMode {
    Light => "light",
    Dark => "dark",
});

/// Application font family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Bauhaus,
    Hummingbird,
    LobsterTwo,
    NexaScript,
    NotoSerif,
    Roboto,
    Ubuntu,
}

impl_wire_string_conversions!(FontStyle {
    Bauhaus => "Bauhaus",
    Hummingbird => "Hummingbird",
    LobsterTwo => "LobsterTwo",
    NexaScript => "NexaScript",
    NotoSerif => "NotoSerif",
    Roboto => "Roboto",
    Ubuntu => "Ubuntu",
});

/// Locales the client ships translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLocale {
    #[default]
    En,
    De,
    Ru,
    Uk,
}

impl_wire_string_conversions!(SupportedLocale {
    En => "en",
    De => "de",
    Ru => "ru",
    Uk => "uk",
});

impl SupportedLocale {
    /// Resolve a language code, falling back to English for anything unknown.
    pub fn from_code(code: &str) -> Self {
        code.trim().parse().unwrap_or_default()
    }

    /// Text direction for the locale's messages.
    pub const fn text_direction(self) -> TextDirection {
        match self {
            Self::En | Self::De | Self::Ru | Self::Uk => TextDirection::LeftToRight,
        }
    }
}

/// Reading direction of the active locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl ThemeMode {
    /// Parse a wire value, treating empty or unknown strings as absent.
    pub fn from_wire(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}

impl FontStyle {
    /// Parse a wire value, treating empty or unknown strings as absent.
    pub fn from_wire(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}
