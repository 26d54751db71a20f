#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{rc::Rc, time::Duration};

use enum_assoc::Assoc;
use gpui::{
    Animation, AnimationExt, App, ClickEvent, DefiniteLength, ElementId, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Transformation,
    Window, percentage, prelude::FluentBuilder, svg,
};
use gpui_tide_theme::{ThemeExt, Token};

use crate::{
    TideIconKind,
    components::{AnyComponent, ButtonVariant, ComponentProps, OnClickFn, button_frame},
};

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn padding_x(&self) -> Token)]
#[func(pub fn padding_y(&self) -> Token)]
#[func(pub fn text_size(&self) -> Token)]
pub enum ButtonSize {
    #[assoc(padding_x = Token::Space3)]
    #[assoc(padding_y = Token::Space1)]
    #[assoc(text_size = Token::TextXs)]
    Sm,
    #[default]
    #[assoc(padding_x = Token::Space4)]
    #[assoc(padding_y = Token::Space2)]
    #[assoc(text_size = Token::TextSm)]
    Md,
    #[assoc(padding_x = Token::Space6)]
    #[assoc(padding_y = Token::Space3)]
    #[assoc(text_size = Token::TextBase)]
    Lg,
}

/// A button with sizes, a leading icon and a loading state.
///
/// While loading the button shows a spinner in place of its icon and ignores
/// clicks, the same as when disabled.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    icon: Option<TideIconKind>,
    loading: bool,
    disabled: bool,
    on_click: Option<OnClickFn>,
}

impl ButtonSize {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: SharedString::from("Button"),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            icon: None,
            loading: false,
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

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: TideIconKind) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
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

    pub fn is_interactive(&self) -> bool {
        !(self.disabled || self.loading)
    }

    /// Builds a button from resolved props. Beyond the base mapping this reads
    /// `size` and `loading`.
    pub fn from_props(props: ComponentProps) -> Self {
        let variant = ButtonVariant::from_name(props.variant_str()).unwrap_or_default();
        let size = props
            .size
            .as_ref()
            .map(SharedString::as_str)
            .and_then(ButtonSize::from_name)
            .unwrap_or_default();

        let mut button = Button::new(props.id)
            .variant(variant)
            .size(size)
            .loading(props.loading)
            .disabled(props.disabled);
        if let Some(text) = props.text {
            button = button.text(text);
        }
        button
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            Button::from_props(props).into_any_element()
        })
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let interactive = self.is_interactive();
        let foreground = cx.theme_color(self.variant.foreground());
        let icon_size = cx.theme_length(self.size.text_size());

        let icon = if self.loading {
            Some(
                svg()
                    .path(TideIconKind::Spinner.path())
                    .size(DefiniteLength::Absolute(icon_size))
                    .text_color(foreground)
                    .with_animation(
                        "spinner",
                        Animation::new(Duration::from_secs(1)).repeat(),
                        |spinner, delta| {
                            spinner.with_transformation(Transformation::rotate(percentage(delta)))
                        },
                    )
                    .into_any_element(),
            )
        } else {
            self.icon.map(|icon| {
                svg()
                    .path(icon.path())
                    .size(DefiniteLength::Absolute(icon_size))
                    .text_color(foreground)
                    .into_any_element()
            })
        };

        button_frame(self.id, self.variant, !interactive, cx)
            .px(cx.theme_length(self.size.padding_x()))
            .py(cx.theme_length(self.size.padding_y()))
            .text_size(icon_size)
            .when_some(self.on_click.filter(|_| interactive), |this, on_click| {
                this.on_click(move |event, window, cx| (on_click)(event, window, cx))
            })
            .children(icon)
            .child(self.text)
    }
}
