use gpui::{AbsoluteLength, Rgba, SharedString};
use serde::{Deserialize, Serialize};

use crate::{
    AppliedStyle, PrimaryColor, StyleSink, StyleVariant, Stylesheet, ThemeError, ThemeMode, Token,
    TokenMap,
    values::{parse_abs_length, parse_color},
};

/// Configuration a theme provider is mounted (and re-rendered) with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeProps {
    pub theme: ThemeMode,
    pub primary_color: PrimaryColor,
    pub custom_tokens: TokenMap,
}

impl ThemeProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn primary_color(mut self, primary_color: PrimaryColor) -> Self {
        self.primary_color = primary_color;
        self
    }

    pub fn custom_token(mut self, token: Token, value: impl Into<SharedString>) -> Self {
        self.custom_tokens.insert(token, value.into());
        self
    }

    pub fn custom_tokens(mut self, custom_tokens: TokenMap) -> Self {
        self.custom_tokens = custom_tokens;
        self
    }
}

/// The read side of a mounted provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSnapshot {
    pub theme: ThemeMode,
    pub primary_color: PrimaryColor,
    pub is_dark: bool,
}

/// State owned by one mounted theme provider.
///
/// Every transition ends in a commit that pushes an [`AppliedStyle`] to the
/// provider's sink. Commits that would push the same style as the previous one
/// are skipped.
pub struct ThemeState {
    props: ThemeProps,
    theme: ThemeMode,
    primary_color: PrimaryColor,
    system_is_dark: bool,
    sink: Box<dyn StyleSink>,
    applied: Option<AppliedStyle>,
}

impl ThemeState {
    /// Creates the state from its initial props and applies the first style.
    pub fn mount(props: ThemeProps, system_is_dark: bool, sink: impl StyleSink + 'static) -> Self {
        let mut state = Self {
            theme: props.theme,
            primary_color: props.primary_color,
            props,
            system_is_dark,
            sink: Box::new(sink),
            applied: None,
        };
        state.commit();
        state
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn primary_color(&self) -> PrimaryColor {
        self.primary_color
    }

    pub fn system_is_dark(&self) -> bool {
        self.system_is_dark
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_is_dark)
    }

    pub fn props(&self) -> &ThemeProps {
        &self.props
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            theme: self.theme,
            primary_color: self.primary_color,
            is_dark: self.is_dark(),
        }
    }

    pub fn variant(&self) -> StyleVariant {
        StyleVariant::select(self.theme, self.is_dark())
    }

    /// Primary color tokens with the caller's custom tokens written on top.
    pub fn merged_tokens(&self) -> TokenMap {
        let reference = self.primary_color.reference();
        let mut tokens = TokenMap::new()
            .with(Token::Primary, reference.clone())
            .with(Token::Ring, reference);
        tokens.merge(&self.props.custom_tokens);
        tokens
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.theme != theme {
            tracing::debug!(from = %self.theme, to = %theme, "theme changed");
        }
        self.theme = theme;
        self.commit();
    }

    pub fn set_primary_color(&mut self, primary_color: PrimaryColor) {
        if self.primary_color != primary_color {
            tracing::debug!(from = %self.primary_color, to = %primary_color, "primary color changed");
        }
        self.primary_color = primary_color;
        self.commit();
    }

    /// Records an OS appearance change. Only visible while the theme is `system`.
    pub fn set_system_dark(&mut self, system_is_dark: bool) {
        if self.system_is_dark != system_is_dark {
            tracing::debug!(system_is_dark, "system appearance changed");
        }
        self.system_is_dark = system_is_dark;
        self.commit();
    }

    /// Re-renders the provider with new props.
    ///
    /// A prop only overwrites the current value when it differs from the prop
    /// seen last time, so values chosen through the setters survive re-renders
    /// with unchanged props. Custom tokens always follow the props.
    pub fn sync_props(&mut self, props: ThemeProps) {
        if props.theme != self.props.theme {
            tracing::debug!(theme = %props.theme, "theme prop changed");
            self.theme = props.theme;
        }

        if props.primary_color != self.props.primary_color {
            tracing::debug!(primary_color = %props.primary_color, "primary color prop changed");
            self.primary_color = props.primary_color;
        }

        self.props = props;
        self.commit();
    }

    /// Resolves `token` through `stylesheet`, with this provider's merged tokens
    /// as the inline layer.
    pub fn resolve(&self, stylesheet: &Stylesheet, token: Token) -> Option<SharedString> {
        stylesheet.resolve(self.variant(), &self.merged_tokens(), token)
    }

    pub fn resolve_color(&self, stylesheet: &Stylesheet, token: Token) -> Option<Rgba> {
        self.resolve(stylesheet, token)
            .and_then(|value| parse_color(&value))
    }

    pub fn resolve_length(&self, stylesheet: &Stylesheet, token: Token) -> Option<AbsoluteLength> {
        self.resolve(stylesheet, token)
            .and_then(|value| parse_abs_length(&value))
    }

    fn commit(&mut self) {
        let style = AppliedStyle {
            theme_attribute: (self.theme != ThemeMode::System).then_some(self.theme),
            dark: self.is_dark(),
            properties: self.merged_tokens(),
        };

        if self.applied.as_ref() == Some(&style) {
            return;
        }

        tracing::trace!(theme = %self.theme, dark = style.dark, "applying theme style");
        self.sink.apply(&style);
        self.applied = Some(style);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{DARK_CLASS, SharedStyleRoot, StyleRoot, THEME_ATTRIBUTE};

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<AppliedStyle>,
    }

    impl StyleSink for RecordingSink {
        fn apply(&mut self, style: &AppliedStyle) {
            self.applied.push(style.clone());
        }
    }

    fn mount(props: ThemeProps, system_is_dark: bool) -> (ThemeState, SharedStyleRoot) {
        let root = StyleRoot::shared();
        let state = ThemeState::mount(props, system_is_dark, root.clone());
        (state, root)
    }

    fn property(root: &SharedStyleRoot, name: &str) -> Option<String> {
        root.borrow().property(name).map(ToString::to_string)
    }

    #[test]
    fn test_default_state() {
        let (state, root) = mount(ThemeProps::default(), false);

        assert_eq!(
            state.snapshot(),
            ThemeSnapshot {
                theme: ThemeMode::System,
                primary_color: PrimaryColor::Ocean,
                is_dark: false,
            }
        );
        assert!(root.borrow().attribute(THEME_ATTRIBUTE).is_none());
        assert!(!root.borrow().has_class(DARK_CLASS));
        assert_eq!(
            property(&root, "--ds-primary").as_deref(),
            Some("var(--ds-ocean-base)")
        );
    }

    #[test]
    fn test_is_dark_for_every_mode_and_os_setting() {
        for theme in ThemeMode::ALL {
            for os_dark in [true, false] {
                let (state, root) = mount(ThemeProps::new().theme(theme), os_dark);
                let expected =
                    theme == ThemeMode::Dark || (theme == ThemeMode::System && os_dark);

                assert_eq!(state.is_dark(), expected, "{theme} / os_dark={os_dark}");
                assert_eq!(root.borrow().has_class(DARK_CLASS), expected);
            }
        }
    }

    #[test]
    fn test_named_modes_set_the_attribute() {
        let (mut state, root) = mount(ThemeProps::new().theme(ThemeMode::White), false);
        assert_eq!(
            root.borrow().attribute(THEME_ATTRIBUTE).map(ToString::to_string),
            Some("white".to_string())
        );

        state.set_theme(ThemeMode::System);
        assert!(root.borrow().attribute(THEME_ATTRIBUTE).is_none());
    }

    #[test]
    fn test_primary_color_drives_primary_and_ring() {
        let (mut state, root) = mount(ThemeProps::new().primary_color(PrimaryColor::Sunset), false);

        assert_eq!(
            property(&root, "--ds-primary").as_deref(),
            Some("var(--ds-sunset-base)")
        );
        assert_eq!(
            property(&root, "--ds-ring").as_deref(),
            Some("var(--ds-sunset-base)")
        );

        state.set_primary_color(PrimaryColor::Marine);
        assert_eq!(
            property(&root, "--ds-primary").as_deref(),
            Some("var(--ds-marine-base)")
        );
        assert_eq!(
            property(&root, "--ds-ring").as_deref(),
            Some("var(--ds-marine-base)")
        );

        state.set_theme(ThemeMode::Dark);
        assert_eq!(state.primary_color(), PrimaryColor::Marine);
        assert_eq!(
            property(&root, "--ds-primary").as_deref(),
            Some("var(--ds-marine-base)")
        );
    }

    #[test]
    fn test_custom_tokens_override_color_tokens() {
        for color in PrimaryColor::ALL {
            let props = ThemeProps::new()
                .primary_color(color)
                .custom_token(Token::Primary, "X");
            let (_state, root) = mount(props, false);

            assert_eq!(property(&root, "--ds-primary").as_deref(), Some("X"));
            assert_eq!(
                property(&root, "--ds-ring").map(|ring| ring == color.reference().to_string()),
                Some(true)
            );
        }
    }

    #[test]
    fn test_system_appearance_changes_only_matter_under_system() {
        let (mut state, root) = mount(ThemeProps::default(), false);
        state.set_system_dark(true);
        assert!(state.is_dark());
        assert!(root.borrow().has_class(DARK_CLASS));

        state.set_theme(ThemeMode::Light);
        state.set_system_dark(false);
        state.set_system_dark(true);
        assert!(!state.is_dark());
        assert!(!root.borrow().has_class(DARK_CLASS));
    }

    #[test]
    fn test_set_theme_twice_is_idempotent() {
        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        let mut state = ThemeState::mount(ThemeProps::default(), false, sink.clone());

        state.set_theme(ThemeMode::Dark);
        let snapshot = state.snapshot();
        state.set_theme(ThemeMode::Dark);

        assert_eq!(state.snapshot(), snapshot);
        assert_eq!(sink.borrow().applied.len(), 2, "mount plus one change");
    }

    #[test]
    fn test_prop_resync_is_one_way() {
        let (mut state, _root) = mount(ThemeProps::new().theme(ThemeMode::Light), false);

        state.set_theme(ThemeMode::Dark);
        state.sync_props(ThemeProps::new().theme(ThemeMode::Light));
        assert_eq!(state.theme(), ThemeMode::Dark, "unchanged prop keeps the set value");

        state.sync_props(ThemeProps::new().theme(ThemeMode::White));
        assert_eq!(state.theme(), ThemeMode::White);
    }

    #[test]
    fn test_prop_resync_for_primary_color() {
        let (mut state, root) = mount(ThemeProps::default(), false);

        state.sync_props(ThemeProps::new().primary_color(PrimaryColor::Sun));
        assert_eq!(state.primary_color(), PrimaryColor::Sun);
        assert_eq!(
            property(&root, "--ds-primary").as_deref(),
            Some("var(--ds-sun-base)")
        );
    }

    #[test]
    fn test_custom_tokens_follow_props() {
        let (mut state, root) = mount(
            ThemeProps::new().custom_token(Token::Space4, "20px"),
            false,
        );
        assert_eq!(property(&root, "--ds-space-4").as_deref(), Some("20px"));

        state.sync_props(ThemeProps::new().custom_token(Token::Space4, "18px"));
        assert_eq!(property(&root, "--ds-space-4").as_deref(), Some("18px"));
    }

    #[test]
    fn test_props_from_json() {
        let props = ThemeProps::from_json(
            r#"{"theme":"dark","primaryColor":"sunset","customTokens":{"--ds-radius-md":"6px"}}"#,
        )
        .unwrap();

        assert_eq!(props.theme, ThemeMode::Dark);
        assert_eq!(props.primary_color, PrimaryColor::Sunset);
        assert_eq!(
            props.custom_tokens.get(&Token::RadiusMd).map(ToString::to_string),
            Some("6px".to_string())
        );

        assert_eq!(ThemeProps::from_json("{}").unwrap(), ThemeProps::default());
        assert!(ThemeProps::from_json(r#"{"theme":"sepia"}"#).is_err());
        assert!(ThemeProps::from_json(r#"{"customTokens":{"--nope":"1"}}"#).is_err());
    }

    #[test]
    fn test_resolve_through_bundled_stylesheet() {
        let sheet = Stylesheet::bundled();
        let (mut state, _root) = mount(ThemeProps::new().primary_color(PrimaryColor::Sunset), false);

        assert_eq!(
            state.resolve_color(sheet, Token::Primary),
            state.resolve_color(sheet, Token::SunsetBase)
        );

        let light_bg = state.resolve_color(sheet, Token::Background);
        state.set_theme(ThemeMode::Dark);
        assert_ne!(state.resolve_color(sheet, Token::Background), light_bg);

        assert!(state.resolve_length(sheet, Token::Space4).is_some());
    }
}
