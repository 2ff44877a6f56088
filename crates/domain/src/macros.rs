//! Macro for implementing Display and FromStr for wire-string enums
//!
//! Preference enums travel as plain strings ("dark", "NotoSerif", "uk"). This
//! macro keeps the wire spelling for `Display` and accepts any casing when
//! parsing.
//!
//! # Example
//!
//! ```rust
//! use aspire_domain::impl_wire_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shade {
//!     Light,
//!     Dark,
//! }
//!
//! impl_wire_string_conversions!(Shade {
//!     Light => "light",
//!     Dark => "dark",
//! });
//!
//! assert_eq!("DARK".parse::<Shade>(), Ok(Shade::Dark));
//! assert_eq!(Shade::Light.to_string(), "light");
//! ```

/// Implements Display and FromStr for enums with a fixed wire spelling
///
/// This macro generates:
/// - Display trait: writes the exact wire string
/// - FromStr trait: case-insensitive match against the wire strings
/// - `as_wire_str()`: the wire string as `&'static str`
#[macro_export]
macro_rules! impl_wire_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Exact spelling used on the wire.
            pub const fn as_wire_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
