#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};
use gpui_tide_theme::{ThemeExt, Token};

use crate::components::{AnyComponent, ComponentProps};

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn text_size(&self) -> Token)]
pub enum HeadingLevel {
    #[default]
    #[assoc(as_str = "h1")]
    #[assoc(text_size = Token::Text2xl)]
    H1,
    #[assoc(as_str = "h2")]
    #[assoc(text_size = Token::TextXl)]
    H2,
    #[assoc(as_str = "h3")]
    #[assoc(text_size = Token::TextLg)]
    H3,
    #[assoc(as_str = "h4")]
    #[assoc(text_size = Token::TextBase)]
    H4,
}

impl HeadingLevel {
    pub const ALL: [Self; 4] = [Self::H1, Self::H2, Self::H3, Self::H4];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }
}

#[derive(IntoElement)]
pub struct Heading {
    text: SharedString,
    level: HeadingLevel,
}

impl Heading {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            level: HeadingLevel::default(),
        }
    }

    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = level;
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            Heading::new(props.text.clone().unwrap_or_default())
                .level(HeadingLevel::from_name(props.variant_str()).unwrap_or_default())
                .into_any_element()
        })
    }
}

impl RenderOnce for Heading {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .font_family(cx.theme_font_family(Token::FontSans))
            .text_size(cx.theme_length(self.level.text_size()))
            .font_weight(cx.theme_font_weight(Token::FontWeightBold))
            .text_color(cx.theme_color(Token::Foreground))
            .child(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_shrink() {
        assert_eq!(HeadingLevel::H1.text_size(), Token::Text2xl);
        assert_eq!(HeadingLevel::H4.text_size(), Token::TextBase);
        assert_eq!(HeadingLevel::from_name("h3"), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_name("h7"), None);
    }
}
