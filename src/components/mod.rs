use std::rc::Rc;

use gpui::{AnyElement, App, ElementId, SharedString, Window};

use crate::resolver::ModuleTable;

mod button;
pub use button::*;

pub mod extended;

mod card;
pub use card::*;

mod separator;
pub use separator::*;

mod nav_bar;
pub use nav_bar::*;

mod alert;
pub use alert::*;

mod badge;
pub use badge::*;

mod heading;
pub use heading::*;

mod text;
pub use text::*;

/// Props every resolved component accepts.
///
/// `variant` is matched against the component's own variant names; unknown
/// names fall back to the component's default variant. Components ignore the
/// fields they have no use for.
#[derive(Debug, Clone)]
pub struct ComponentProps {
    pub id: ElementId,
    pub text: Option<SharedString>,
    pub variant: Option<SharedString>,
    pub size: Option<SharedString>,
    pub disabled: bool,
    pub loading: bool,
}

impl ComponentProps {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            variant: None,
            size: None,
            disabled: false,
            loading: false,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<SharedString>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, size: impl Into<SharedString>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub(crate) fn variant_str(&self) -> &str {
        self.variant.as_ref().map(SharedString::as_str).unwrap_or_default()
    }
}

/// A resolved component: builds an element from props.
pub type AnyComponent = Rc<dyn Fn(ComponentProps, &mut Window, &mut App) -> AnyElement>;

/// The modules of every built-in component, keyed by the paths the bundled
/// manifest uses.
pub fn module_table() -> ModuleTable<AnyComponent> {
    let mut table = ModuleTable::new();
    table
        .register_default("components::button", Button::component())
        .register_default("components::extended::button", extended::Button::component())
        .register_default("components::card", Card::component())
        .register_default("components::separator", Separator::component())
        .register_default("components::nav_bar", NavBar::component())
        .register_default("components::alert", Alert::component())
        .register_default("components::badge", Badge::component())
        .register_default("components::heading", Heading::component())
        .register_default("components::text", Text::component());
    table
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use gpui::{
        AvailableSpace, IntoElement, ParentElement, TestAppContext, VisualTestContext, point, px,
        size,
    };
    use gpui_tide_theme::{NoopSink, ThemeExt, ThemeMode, ThemeProps};

    use super::*;
    use crate::{registry::registry, resolver::resolve_component};

    fn draw_every_component(cx: &mut VisualTestContext) {
        for (name, _) in registry().iter() {
            let component = smol::block_on(resolve_component(name)).unwrap();
            let props = ComponentProps::new(SharedString::from(format!("{name}-test")))
                .text("Label")
                .loading(true);

            cx.draw(
                point(px(0.), px(0.)),
                size(
                    AvailableSpace::Definite(px(800.)),
                    AvailableSpace::Definite(px(600.)),
                ),
                move |window, cx| component(props, window, cx),
            );
        }
    }

    #[gpui::test]
    fn test_resolved_components_draw(cx: &mut TestAppContext) {
        let cx = cx.add_empty_window();
        cx.update(|_window, cx| cx.mount_theme_provider(ThemeProps::default(), NoopSink));
        draw_every_component(cx);

        cx.update(|_window, cx| cx.set_theme_mode(ThemeMode::Dark)).unwrap();
        draw_every_component(cx);
    }

    #[gpui::test]
    fn test_components_draw_without_provider(cx: &mut TestAppContext) {
        let cx = cx.add_empty_window();
        draw_every_component(cx);
    }

    #[gpui::test]
    fn test_composed_components_draw(cx: &mut TestAppContext) {
        let cx = cx.add_empty_window();
        cx.update(|_window, cx| cx.mount_theme_provider(ThemeProps::default(), NoopSink));

        cx.draw(
            point(px(0.), px(0.)),
            size(
                AvailableSpace::Definite(px(800.)),
                AvailableSpace::Definite(px(600.)),
            ),
            |_window, _cx| {
                Card::new("card")
                    .title("Settings")
                    .description("Theme and color")
                    .child(Separator::new())
                    .child(
                        NavBar::new("nav")
                            .brand("Tide")
                            .link("home", "Home")
                            .active("home"),
                    )
                    .child(Alert::new("alert", "Saved").variant(AlertVariant::Success))
                    .child(Badge::new("New"))
                    .child(Heading::new("Title").level(HeadingLevel::H2))
                    .child(Text::new("Body").variant(TextVariant::Muted))
                    .child(
                        extended::Button::new("extended")
                            .icon(crate::TideIconKind::ArrowRight)
                            .size(extended::ButtonSize::Sm),
                    )
                    .into_any_element()
            },
        );
    }
}
