//! Presentation preferences applied after sign-in

use aspire_domain::{FontStyle, ProfileRecord, SupportedLocale, TextDirection, ThemeMode};
use tracing::debug;

/// Theme, font and locale currently in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationState {
    pub theme_mode: ThemeMode,
    pub font_style: FontStyle,
    pub locale: SupportedLocale,
    pub text_direction: TextDirection,
}

impl PresentationState {
    /// Apply the preferences carried by a login response.
    ///
    /// The theme always changes (light when the record has none); locale and
    /// font only change when the record carries a usable value.
    pub fn apply_login_preferences(&mut self, record: &ProfileRecord) {
        self.theme_mode = record.theme_mode().unwrap_or_default();

        if let Some(locale) = record.preferred_locale() {
            self.change_locale(locale);
        }
        if let Some(font) = record.font_style() {
            self.font_style = font;
        }

        debug!(
            theme = %self.theme_mode,
            font = %self.font_style,
            locale = %self.locale,
            "Applied login presentation preferences"
        );
    }

    pub fn change_locale(&mut self, locale: SupportedLocale) {
        self.locale = locale;
        self.text_direction = locale.text_direction();
    }
}
