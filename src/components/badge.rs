#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_tide_theme::{ThemeExt, Token};

use crate::components::{AnyComponent, ComponentProps};

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn background(&self) -> Option<Token>)]
#[func(pub fn foreground(&self) -> Token)]
pub enum BadgeVariant {
    #[default]
    #[assoc(as_str = "default")]
    #[assoc(background = Token::Primary)]
    #[assoc(foreground = Token::PrimaryForeground)]
    Default,
    #[assoc(as_str = "secondary")]
    #[assoc(background = Token::Muted)]
    #[assoc(foreground = Token::Foreground)]
    Secondary,
    #[assoc(as_str = "outline")]
    #[assoc(background = None)]
    #[assoc(foreground = Token::Foreground)]
    Outline,
    #[assoc(as_str = "destructive")]
    #[assoc(background = Token::Danger)]
    #[assoc(foreground = Token::PrimaryForeground)]
    Destructive,
}

impl BadgeVariant {
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Secondary,
        Self::Outline,
        Self::Destructive,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == name)
    }
}

/// A small pill label.
#[derive(IntoElement)]
pub struct Badge {
    text: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            Badge::new(props.text.clone().unwrap_or_default())
                .variant(BadgeVariant::from_name(props.variant_str()).unwrap_or_default())
                .into_any_element()
        })
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let background = self.variant.background().map(|token| cx.theme_color(token));

        div()
            .flex_none()
            .px(cx.theme_length(Token::Space2))
            .py(cx.theme_length(Token::Space1))
            .rounded(cx.theme_length(Token::RadiusFull))
            .font_family(cx.theme_font_family(Token::FontSans))
            .text_size(cx.theme_length(Token::TextXs))
            .font_weight(cx.theme_font_weight(Token::FontWeightMedium))
            .text_color(cx.theme_color(self.variant.foreground()))
            .map(|this| match background {
                Some(background) => this.bg(background),
                None => this.border_1().border_color(cx.theme_color(Token::Border)),
            })
            .child(self.text)
    }
}
