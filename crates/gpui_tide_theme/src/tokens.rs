use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use gpui::SharedString;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::ThemeError;

/// Broad grouping of the token vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Semantic,
    Spacing,
    Radius,
    Typography,
}

macro_rules! define_tokens {
    ( $( $category:ident { $( $variant:ident => $name:literal ),+ $(,)? } )+ ) => {
        /// A design token from the closed `--ds-*` vocabulary.
        ///
        /// Tokens are written to the style sink as custom properties and looked
        /// up through the stylesheet cascade when components render.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Token {
            $( $( $variant, )+ )+
        }

        impl Token {
            /// Every token, in declaration order.
            pub const ALL: &'static [Token] = &[ $( $( Token::$variant, )+ )+ ];

            /// The custom property name, e.g. `--ds-primary`.
            pub const fn name(&self) -> &'static str {
                match self {
                    $( $( Token::$variant => $name, )+ )+
                }
            }

            pub const fn category(&self) -> TokenCategory {
                match self {
                    $( $( Token::$variant => TokenCategory::$category, )+ )+
                }
            }
        }
    };
}

define_tokens! {
    Color {
        OceanBase => "--ds-ocean-base",
        OceanLight => "--ds-ocean-light",
        OceanDark => "--ds-ocean-dark",
        SunsetBase => "--ds-sunset-base",
        SunsetLight => "--ds-sunset-light",
        SunsetDark => "--ds-sunset-dark",
        SunBase => "--ds-sun-base",
        SunLight => "--ds-sun-light",
        SunDark => "--ds-sun-dark",
        MarineBase => "--ds-marine-base",
        MarineLight => "--ds-marine-light",
        MarineDark => "--ds-marine-dark",
        White => "--ds-white",
        Black => "--ds-black",
        Gray100 => "--ds-gray-100",
        Gray200 => "--ds-gray-200",
        Gray300 => "--ds-gray-300",
        Gray500 => "--ds-gray-500",
        Gray700 => "--ds-gray-700",
        Gray800 => "--ds-gray-800",
        Gray900 => "--ds-gray-900",
    }
    Semantic {
        Primary => "--ds-primary",
        PrimaryForeground => "--ds-primary-foreground",
        Ring => "--ds-ring",
        Background => "--ds-background",
        Foreground => "--ds-foreground",
        Muted => "--ds-muted",
        MutedForeground => "--ds-muted-foreground",
        Border => "--ds-border",
        Card => "--ds-card",
        CardForeground => "--ds-card-foreground",
        Success => "--ds-success",
        Warning => "--ds-warning",
        Danger => "--ds-danger",
        Info => "--ds-info",
    }
    Spacing {
        Space1 => "--ds-space-1",
        Space2 => "--ds-space-2",
        Space3 => "--ds-space-3",
        Space4 => "--ds-space-4",
        Space6 => "--ds-space-6",
        Space8 => "--ds-space-8",
    }
    Radius {
        RadiusSm => "--ds-radius-sm",
        RadiusMd => "--ds-radius-md",
        RadiusLg => "--ds-radius-lg",
        RadiusFull => "--ds-radius-full",
    }
    Typography {
        FontSans => "--ds-font-sans",
        FontMono => "--ds-font-mono",
        TextXs => "--ds-text-xs",
        TextSm => "--ds-text-sm",
        TextBase => "--ds-text-base",
        TextLg => "--ds-text-lg",
        TextXl => "--ds-text-xl",
        Text2xl => "--ds-text-2xl",
        FontWeightRegular => "--ds-font-weight-regular",
        FontWeightMedium => "--ds-font-weight-medium",
        FontWeightBold => "--ds-font-weight-bold",
        LineHeight => "--ds-line-height",
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Token {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.name() == s)
            .ok_or_else(|| ThemeError::UnknownToken(s.to_string()))
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// An ordered set of token values, keyed by custom property name when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap(IndexMap<Token, SharedString>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: Token, value: impl Into<SharedString>) -> Self {
        self.0.insert(token, value.into());
        self
    }

    /// Writes every entry of `other` over this map. Later values win.
    pub fn merge(&mut self, other: &TokenMap) {
        for (token, value) in other.iter() {
            self.0.insert(*token, value.clone());
        }
    }
}

impl Deref for TokenMap {
    type Target = IndexMap<Token, SharedString>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TokenMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V: Into<SharedString>> FromIterator<(Token, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (Token, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(token, value)| (token, value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names_are_unique_and_prefixed() {
        let mut names: Vec<&str> = Token::ALL.iter().map(Token::name).collect();
        assert!(names.iter().all(|name| name.starts_with("--ds-")));

        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "token names must be unique");
    }

    #[test]
    fn test_token_parse_round_trips_every_name() {
        for token in Token::ALL {
            assert_eq!(token.name().parse::<Token>().unwrap(), *token);
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "--ds-not-a-token".parse::<Token>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken(name) if name == "--ds-not-a-token"));
    }

    #[test]
    fn test_token_categories() {
        assert_eq!(Token::SunsetBase.category(), TokenCategory::Color);
        assert_eq!(Token::Ring.category(), TokenCategory::Semantic);
        assert_eq!(Token::Space4.category(), TokenCategory::Spacing);
        assert_eq!(Token::RadiusMd.category(), TokenCategory::Radius);
        assert_eq!(Token::TextBase.category(), TokenCategory::Typography);
    }

    #[test]
    fn test_token_map_json_uses_property_names() {
        let map = TokenMap::new()
            .with(Token::Primary, "#ff0000")
            .with(Token::Space2, "8px");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r##"{"--ds-primary":"#ff0000","--ds-space-2":"8px"}"##);

        let parsed: TokenMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_token_map_rejects_unknown_keys() {
        let result = serde_json::from_str::<TokenMap>(r#"{"--ds-bogus":"1px"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_existing_values() {
        let mut base = TokenMap::new()
            .with(Token::Primary, "var(--ds-ocean-base)")
            .with(Token::Ring, "var(--ds-ocean-base)");
        base.merge(&TokenMap::new().with(Token::Primary, "X"));

        assert_eq!(base.get(&Token::Primary).map(ToString::to_string), Some("X".into()));
        assert_eq!(
            base.get(&Token::Ring).map(ToString::to_string),
            Some("var(--ds-ocean-base)".into())
        );
    }
}
