use std::{cell::RefCell, rc::Rc};

use gpui::SharedString;
use indexmap::{IndexMap, IndexSet};

use crate::{ThemeMode, TokenMap};

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_CLASS: &str = "dark";

/// Everything a theme provider pushes to its environment in one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedStyle {
    /// Value for the `data-theme` attribute. `None` when the mode is `system`.
    pub theme_attribute: Option<ThemeMode>,
    pub dark: bool,
    pub properties: TokenMap,
}

/// The target a theme provider writes its attributes, classes and custom
/// properties to.
///
/// Each provider owns its sink, so independent providers never contend for
/// the same target.
pub trait StyleSink {
    fn apply(&mut self, style: &AppliedStyle);
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn apply(&mut self, style: &AppliedStyle) {
        (**self).apply(style)
    }
}

impl<S: StyleSink> StyleSink for Rc<RefCell<S>> {
    fn apply(&mut self, style: &AppliedStyle) {
        self.borrow_mut().apply(style)
    }
}

/// Discards every style. Useful for providers nobody observes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl StyleSink for NoopSink {
    fn apply(&mut self, _style: &AppliedStyle) {}
}

/// An in-memory root element: attributes, a class list and inline custom
/// properties.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleRoot {
    attributes: IndexMap<SharedString, SharedString>,
    classes: IndexSet<SharedString>,
    properties: IndexMap<SharedString, SharedString>,
}

pub type SharedStyleRoot = Rc<RefCell<StyleRoot>>;

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStyleRoot {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn attribute(&self, name: &str) -> Option<&SharedString> {
        self.attributes.get(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn property(&self, name: &str) -> Option<&SharedString> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&SharedString, &SharedString)> {
        self.properties.iter()
    }

    pub fn set_attribute(&mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.shift_remove(name);
    }

    pub fn toggle_class(&mut self, class: impl Into<SharedString>, enabled: bool) {
        let class = class.into();
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.shift_remove(&class);
        }
    }

    pub fn set_property(&mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) {
        self.properties.insert(name.into(), value.into());
    }
}

impl StyleSink for StyleRoot {
    fn apply(&mut self, style: &AppliedStyle) {
        self.remove_attribute(THEME_ATTRIBUTE);
        if let Some(theme) = style.theme_attribute {
            self.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }

        self.toggle_class(DARK_CLASS, style.dark);

        for (token, value) in style.properties.iter() {
            self.set_property(token.name(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    fn style(theme_attribute: Option<ThemeMode>, dark: bool) -> AppliedStyle {
        AppliedStyle {
            theme_attribute,
            dark,
            properties: TokenMap::new().with(Token::Primary, "var(--ds-ocean-base)"),
        }
    }

    #[test]
    fn test_apply_sets_attribute_class_and_properties() {
        let mut root = StyleRoot::new();
        root.apply(&style(Some(ThemeMode::Dark), true));

        assert_eq!(
            root.attribute(THEME_ATTRIBUTE).map(ToString::to_string),
            Some("dark".to_string())
        );
        assert!(root.has_class(DARK_CLASS));
        assert_eq!(
            root.property("--ds-primary").map(ToString::to_string),
            Some("var(--ds-ocean-base)".to_string())
        );
    }

    #[test]
    fn test_system_mode_clears_previous_attribute() {
        let mut root = StyleRoot::new();
        root.apply(&style(Some(ThemeMode::White), false));
        root.apply(&style(None, false));

        assert!(root.attribute(THEME_ATTRIBUTE).is_none());
        assert!(!root.has_class(DARK_CLASS));
    }

    #[test]
    fn test_properties_are_written_not_cleared() {
        let mut root = StyleRoot::new();
        root.set_property("--ds-space-4", "16px");
        root.apply(&style(None, false));

        assert!(root.property("--ds-space-4").is_some());
        assert!(root.property("--ds-primary").is_some());
    }

    #[test]
    fn test_shared_root_is_a_sink() {
        let root = StyleRoot::shared();
        let mut sink = root.clone();
        sink.apply(&style(None, true));

        assert!(root.borrow().has_class(DARK_CLASS));
    }
}
