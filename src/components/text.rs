#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};
use gpui_tide_theme::{ThemeExt, Token};

use crate::components::{AnyComponent, ComponentProps};

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn color(&self) -> Token)]
#[func(pub fn text_size(&self) -> Token)]
pub enum TextVariant {
    #[default]
    #[assoc(as_str = "default")]
    #[assoc(color = Token::Foreground)]
    #[assoc(text_size = Token::TextBase)]
    Default,
    #[assoc(as_str = "muted")]
    #[assoc(color = Token::MutedForeground)]
    #[assoc(text_size = Token::TextBase)]
    Muted,
    #[assoc(as_str = "small")]
    #[assoc(color = Token::Foreground)]
    #[assoc(text_size = Token::TextSm)]
    Small,
}

impl TextVariant {
    pub const ALL: [Self; 3] = [Self::Default, Self::Muted, Self::Small];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == name)
    }
}

/// Body copy.
#[derive(IntoElement)]
pub struct Text {
    text: SharedString,
    variant: TextVariant,
}

impl Text {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: TextVariant::default(),
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            Text::new(props.text.clone().unwrap_or_default())
                .variant(TextVariant::from_name(props.variant_str()).unwrap_or_default())
                .into_any_element()
        })
    }
}

impl RenderOnce for Text {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .font_family(cx.theme_font_family(Token::FontSans))
            .text_size(cx.theme_length(self.variant.text_size()))
            .font_weight(cx.theme_font_weight(Token::FontWeightRegular))
            .line_height(cx.theme_line_height(Token::LineHeight))
            .text_color(cx.theme_color(self.variant.color()))
            .child(self.text)
    }
}
