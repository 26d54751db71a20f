#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use gpui::SharedString;
use serde::{Deserialize, Serialize};

use crate::{ThemeError, Token};

/// The theme a provider is asked to display.
///
/// `System` defers to the OS appearance; every other mode is written to the
/// style root as the `data-theme` attribute.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum ThemeMode {
    #[assoc(as_str = "light")]
    Light,
    #[assoc(as_str = "dark")]
    Dark,
    #[assoc(as_str = "white")]
    White,
    #[default]
    #[assoc(as_str = "system")]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 4] = [Self::Light, Self::Dark, Self::White, Self::System];

    /// Whether this mode renders dark, given what the OS currently reports.
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
            ThemeMode::Light | ThemeMode::White => false,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownMode(s.to_string()))
    }
}

/// Brand color driving `--ds-primary` and `--ds-ring`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn base_token(&self) -> Token)]
pub enum PrimaryColor {
    #[default]
    #[assoc(as_str = "ocean")]
    #[assoc(base_token = Token::OceanBase)]
    Ocean,
    #[assoc(as_str = "sunset")]
    #[assoc(base_token = Token::SunsetBase)]
    Sunset,
    #[assoc(as_str = "sun")]
    #[assoc(base_token = Token::SunBase)]
    Sun,
    #[assoc(as_str = "marine")]
    #[assoc(base_token = Token::MarineBase)]
    Marine,
}

impl PrimaryColor {
    pub const ALL: [PrimaryColor; 4] = [Self::Ocean, Self::Sunset, Self::Sun, Self::Marine];

    /// A `var(...)` reference to this color's base token.
    pub fn reference(&self) -> SharedString {
        format!("var({})", self.base_token().name()).into()
    }
}

impl fmt::Display for PrimaryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownColor(s.to_string()))
    }
}

/// The stylesheet variant selected by the style root's attribute and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    Light,
    White,
    Dark,
}

impl StyleVariant {
    pub fn select(theme: ThemeMode, is_dark: bool) -> Self {
        if is_dark {
            StyleVariant::Dark
        } else if theme == ThemeMode::White {
            StyleVariant::White
        } else {
            StyleVariant::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
        assert_eq!(PrimaryColor::default(), PrimaryColor::Ocean);
    }

    #[test]
    fn test_dark_derivation_table() {
        for theme in ThemeMode::ALL {
            for os_dark in [true, false] {
                let expected =
                    theme == ThemeMode::Dark || (theme == ThemeMode::System && os_dark);
                assert_eq!(theme.is_dark(os_dark), expected, "{theme} / os_dark={os_dark}");
            }
        }

        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::System.is_dark(true));
    }

    #[test]
    fn test_primary_color_reference() {
        assert_eq!(
            PrimaryColor::Sunset.reference().to_string(),
            "var(--ds-sunset-base)"
        );
        assert_eq!(
            PrimaryColor::Marine.reference().to_string(),
            "var(--ds-marine-base)"
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("white".parse::<ThemeMode>().unwrap(), ThemeMode::White);
        assert_eq!("sun".parse::<PrimaryColor>().unwrap(), PrimaryColor::Sun);
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert!("crimson".parse::<PrimaryColor>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<PrimaryColor>("\"marine\"").unwrap(),
            PrimaryColor::Marine
        );
    }

    #[test]
    fn test_style_variant_selection() {
        assert_eq!(StyleVariant::select(ThemeMode::White, false), StyleVariant::White);
        assert_eq!(StyleVariant::select(ThemeMode::System, true), StyleVariant::Dark);
        assert_eq!(StyleVariant::select(ThemeMode::Light, false), StyleVariant::Light);
        assert_eq!(StyleVariant::select(ThemeMode::System, false), StyleVariant::Light);
    }
}
