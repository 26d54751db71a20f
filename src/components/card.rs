use std::rc::Rc;

use gpui::{
    AnyElement, App, Div, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_tide_theme::{ThemeExt, Token};
use smallvec::SmallVec;

use crate::components::{AnyComponent, ComponentProps};

/// A bordered surface with an optional title and description above its children.
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    title: Option<SharedString>,
    description: Option<SharedString>,
    children: SmallVec<[AnyElement; 2]>,
}

impl Card {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            children: SmallVec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn component() -> AnyComponent {
        Rc::new(|props: ComponentProps, _window: &mut Window, _cx: &mut App| {
            let mut card = Card::new(props.id);
            if let Some(text) = props.text {
                card = card.title(text);
            }
            card.into_any_element()
        })
    }

    fn header(&self, cx: &App) -> Option<Div> {
        if self.title.is_none() && self.description.is_none() {
            return None;
        }

        Some(
            div()
                .flex()
                .flex_col()
                .gap(cx.theme_length(Token::Space1))
                .when_some(self.title.clone(), |this, title| {
                    this.child(
                        div()
                            .text_size(cx.theme_length(Token::TextLg))
                            .font_weight(cx.theme_font_weight(Token::FontWeightBold))
                            .child(title),
                    )
                })
                .when_some(self.description.clone(), |this, description| {
                    this.child(
                        div()
                            .text_size(cx.theme_length(Token::TextSm))
                            .text_color(cx.theme_color(Token::MutedForeground))
                            .child(description),
                    )
                }),
        )
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let header = self.header(cx);

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap(cx.theme_length(Token::Space4))
            .p(cx.theme_length(Token::Space6))
            .rounded(cx.theme_length(Token::RadiusLg))
            .border_1()
            .border_color(cx.theme_color(Token::Border))
            .bg(cx.theme_color(Token::Card))
            .text_color(cx.theme_color(Token::CardForeground))
            .font_family(cx.theme_font_family(Token::FontSans))
            .children(header)
            .children(self.children)
    }
}
