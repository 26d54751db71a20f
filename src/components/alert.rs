#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{
    App, DefiniteLength, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, prelude::FluentBuilder, svg,
};
use gpui_tide_theme::{ThemeExt, Token};

use crate::{
    TideIconKind,
    components::{AnyComponent, ComponentProps},
    utils::RgbaExt,
};

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn token(&self) -> Token)]
#[func(pub fn icon(&self) -> TideIconKind)]
pub enum AlertVariant {
    #[default]
    #[assoc(as_str = "info")]
    #[assoc(token = Token::Info)]
    #[assoc(icon = TideIconKind::Info)]
    Info,
    #[assoc(as_str = "success")]
    #[assoc(token = Token::Success)]
    #[assoc(icon = TideIconKind::Check)]
    Success,
    #[assoc(as_str = "warning")]
    #[assoc(token = Token::Warning)]
    #[assoc(icon = TideIconKind::Warning)]
    Warning,
    #[assoc(as_str = "danger")]
    #[assoc(token = Token::Danger)]
    #[assoc(icon = TideIconKind::Danger)]
    Danger,
}

impl AlertVariant {
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Danger];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == name)
    }
}

/// A tinted callout for status messages.
#[derive(IntoElement)]
pub struct Alert {
    id: ElementId,
    variant: AlertVariant,
    title: SharedString,
    description: Option<SharedString>,
}

impl Alert {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            variant: AlertVariant::default(),
            title: title.into(),
            description: None,
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            let variant = AlertVariant::from_name(props.variant_str()).unwrap_or_default();

            Alert::new(props.id, props.text.unwrap_or_default())
                .variant(variant)
                .into_any_element()
        })
    }
}

impl RenderOnce for Alert {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let accent = cx.theme_color(self.variant.token());

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .items_start()
            .gap(cx.theme_length(Token::Space3))
            .p(cx.theme_length(Token::Space4))
            .rounded(cx.theme_length(Token::RadiusMd))
            .border_1()
            .border_color(accent)
            .bg(accent.alpha(0.1))
            .font_family(cx.theme_font_family(Token::FontSans))
            .text_size(cx.theme_length(Token::TextSm))
            .text_color(cx.theme_color(Token::Foreground))
            .child(
                svg()
                    .flex_none()
                    .path(self.variant.icon().path())
                    .size(DefiniteLength::Absolute(cx.theme_length(Token::TextBase)))
                    .text_color(accent),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(cx.theme_length(Token::Space1))
                    .child(
                        div()
                            .font_weight(cx.theme_font_weight(Token::FontWeightMedium))
                            .child(self.title),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            div()
                                .text_color(cx.theme_color(Token::MutedForeground))
                                .child(description),
                        )
                    }),
            )
    }
}
