use std::rc::Rc;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_tide_theme::{ThemeExt, Token};
use smallvec::SmallVec;

use crate::components::{AnyComponent, ComponentProps};

type OnNavigateFn = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub key: SharedString,
    pub label: SharedString,
}

/// A horizontal bar with a brand on the left and links on the right.
///
/// The active link is drawn in the primary color.
#[derive(IntoElement)]
pub struct NavBar {
    id: ElementId,
    brand: Option<SharedString>,
    links: SmallVec<[NavLink; 4]>,
    active: Option<SharedString>,
    on_navigate: Option<OnNavigateFn>,
}

impl NavBar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            brand: None,
            links: SmallVec::new(),
            active: None,
            on_navigate: None,
        }
    }

    pub fn brand(mut self, brand: impl Into<SharedString>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn link(mut self, key: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        self.links.push(NavLink {
            key: key.into(),
            label: label.into(),
        });
        self
    }

    pub fn active(mut self, key: impl Into<SharedString>) -> Self {
        self.active = Some(key.into());
        self
    }

    /// Called with the key of the clicked link.
    pub fn on_navigate(
        mut self,
        on_navigate: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_navigate = Some(Rc::new(on_navigate));
        self
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_ref().map(SharedString::as_str) == Some(key)
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            let mut nav_bar = NavBar::new(props.id);
            if let Some(text) = props.text {
                nav_bar = nav_bar.brand(text);
            }
            nav_bar.into_any_element()
        })
    }
}

impl RenderOnce for NavBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let hover_color = cx.theme_color(Token::Foreground);
        let links = self
            .links
            .iter()
            .enumerate()
            .map(|(ix, link)| {
                let color = if self.is_active(&link.key) {
                    cx.theme_color(Token::Primary)
                } else {
                    cx.theme_color(Token::MutedForeground)
                };
                let id: SharedString = format!("nav-link-{ix}").into();

                div()
                    .id(ElementId::from(id))
                    .text_color(color)
                    .hover(move |style| style.text_color(hover_color))
                    .when_some(self.on_navigate.clone(), |this, on_navigate| {
                        let key = link.key.clone();
                        this.on_click(move |_, window, cx| (on_navigate)(&key, window, cx))
                    })
                    .child(link.label.clone())
            })
            .collect::<Vec<_>>();

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .w_full()
            .px(cx.theme_length(Token::Space6))
            .py(cx.theme_length(Token::Space3))
            .border_b_1()
            .border_color(cx.theme_color(Token::Border))
            .bg(cx.theme_color(Token::Background))
            .font_family(cx.theme_font_family(Token::FontSans))
            .text_size(cx.theme_length(Token::TextSm))
            .when_some(self.brand, |this, brand| {
                this.child(
                    div()
                        .text_size(cx.theme_length(Token::TextLg))
                        .font_weight(cx.theme_font_weight(Token::FontWeightBold))
                        .text_color(cx.theme_color(Token::Foreground))
                        .child(brand),
                )
            })
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(cx.theme_length(Token::Space4))
                    .children(links),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link() {
        let nav_bar = NavBar::new("nav")
            .brand("Tide")
            .link("home", "Home")
            .link("docs", "Docs")
            .active("docs");

        assert!(nav_bar.is_active("docs"));
        assert!(!nav_bar.is_active("home"));
        assert_eq!(nav_bar.links.len(), 2);
    }
}
