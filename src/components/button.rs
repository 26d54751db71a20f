#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{
    App, ClickEvent, CursorStyle, Div, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_tide_theme::{ThemeExt, Token};

use crate::{
    components::{AnyComponent, ComponentProps},
    utils::RgbaExt,
};

pub(crate) type OnClickFn = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn background(&self) -> Option<Token>)]
#[func(pub fn foreground(&self) -> Token)]
#[func(pub fn border(&self) -> Option<Token>)]
pub enum ButtonVariant {
    #[default]
    #[assoc(background = Token::Primary)]
    #[assoc(foreground = Token::PrimaryForeground)]
    #[assoc(border = None)]
    Primary,
    #[assoc(background = Token::Muted)]
    #[assoc(foreground = Token::Foreground)]
    #[assoc(border = Token::Border)]
    Secondary,
    #[assoc(background = None)]
    #[assoc(foreground = Token::Foreground)]
    #[assoc(border = None)]
    Ghost,
    #[assoc(background = Token::Danger)]
    #[assoc(foreground = Token::PrimaryForeground)]
    #[assoc(border = None)]
    Destructive,
}

impl ButtonVariant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" | "default" => Some(Self::Primary),
            "secondary" | "outline" => Some(Self::Secondary),
            "ghost" => Some(Self::Ghost),
            "destructive" => Some(Self::Destructive),
            _ => None,
        }
    }
}

/// The shared surface of base and extended buttons.
pub(crate) fn button_frame(
    id: ElementId,
    variant: ButtonVariant,
    disabled: bool,
    cx: &App,
) -> Stateful<Div> {
    let background = variant.background().map(|token| cx.theme_color(token));
    let border = variant.border().map(|token| cx.theme_color(token));
    let hover = background.unwrap_or_else(|| cx.theme_color(Token::Muted).alpha(0.6));
    let ring = cx.theme_color(Token::Ring);

    div()
        .id(id)
        .flex()
        .flex_row()
        .items_center()
        .justify_center()
        .gap(cx.theme_length(Token::Space2))
        .px(cx.theme_length(Token::Space4))
        .py(cx.theme_length(Token::Space2))
        .rounded(cx.theme_length(Token::RadiusMd))
        .font_family(cx.theme_font_family(Token::FontSans))
        .text_size(cx.theme_length(Token::TextSm))
        .font_weight(cx.theme_font_weight(Token::FontWeightMedium))
        .text_color(cx.theme_color(variant.foreground()))
        .when_some(background, |this, background| this.bg(background))
        .when_some(border, |this, border| this.border_1().border_color(border))
        .map(|this| {
            if disabled {
                this.opacity(0.5).cursor(CursorStyle::OperationNotAllowed)
            } else {
                this.cursor(CursorStyle::PointingHand)
                    .hover(move |style| style.bg(hover.alpha(0.9)))
                    .active(move |style| style.border_color(ring))
            }
        })
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<OnClickFn>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: SharedString::from("Button"),
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = text.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            let variant = ButtonVariant::from_name(props.variant_str()).unwrap_or_default();

            let mut button = Button::new(props.id)
                .variant(variant)
                .disabled(props.disabled);
            if let Some(text) = props.text {
                button = button.text(text);
            }
            button.into_any_element()
        })
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let disabled = self.disabled;

        button_frame(self.id, self.variant, disabled, cx)
            .when_some(self.on_click.filter(|_| !disabled), |this, on_click| {
                this.on_click(move |event, window, cx| (on_click)(event, window, cx))
            })
            .child(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!(ButtonVariant::from_name("ghost"), Some(ButtonVariant::Ghost));
        assert_eq!(ButtonVariant::from_name("outline"), Some(ButtonVariant::Secondary));
        assert_eq!(ButtonVariant::from_name("sparkly"), None);
    }

    #[test]
    fn test_variant_tokens() {
        assert_eq!(ButtonVariant::Primary.background(), Some(Token::Primary));
        assert_eq!(ButtonVariant::Ghost.background(), None);
        assert_eq!(ButtonVariant::Secondary.border(), Some(Token::Border));
        assert_eq!(ButtonVariant::Destructive.background(), Some(Token::Danger));
    }
}
