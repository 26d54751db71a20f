use std::rc::Rc;

use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, px};
use gpui_tide_theme::{ThemeExt, Token};

use crate::components::{AnyComponent, ComponentProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// A one pixel rule in the border color.
#[derive(IntoElement, Default)]
pub struct Separator {
    orientation: Orientation,
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            Separator::new()
                .orientation(Orientation::from_name(props.variant_str()).unwrap_or_default())
                .into_any_element()
        })
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let rule = div().flex_none().bg(cx.theme_color(Token::Border));

        match self.orientation {
            Orientation::Horizontal => rule.w_full().h(px(1.)),
            Orientation::Vertical => rule.h_full().w(px(1.)),
        }
    }
}
