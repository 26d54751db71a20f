use gpui::{App, Window, px};
use gpui_tide_theme::{
    SharedStyleRoot, StyleRoot, ThemeError, ThemeExt, ThemeProps, Token, observe_system_appearance,
};

/// Mounts the theme provider and returns the style root it writes to.
pub fn init(cx: &mut App, props: ThemeProps) -> SharedStyleRoot {
    let root = StyleRoot::shared();
    cx.mount_theme_provider(props, root.clone());
    root
}

/// Matches the window's rem size to the base text size and follows the OS appearance.
pub fn init_for_window(window: &mut Window, cx: &mut App) -> Result<(), ThemeError> {
    let rem_size = cx.theme_length(Token::TextBase).to_pixels(px(16.));
    window.set_rem_size(rem_size);
    observe_system_appearance(window, cx)
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::TestAppContext;
    use gpui_tide_theme::{DARK_CLASS, PrimaryColor, THEME_ATTRIBUTE, ThemeMode};

    use super::*;

    #[gpui::test]
    fn test_init_applies_the_initial_style(cx: &mut TestAppContext) {
        let root = cx.update(|cx| {
            init(
                cx,
                ThemeProps::default()
                    .theme(ThemeMode::Dark)
                    .primary_color(PrimaryColor::Sunset),
            )
        });

        let root = root.borrow();
        assert_eq!(
            root.attribute(THEME_ATTRIBUTE).map(ToString::to_string),
            Some("dark".into())
        );
        assert!(root.has_class(DARK_CLASS));
        assert_eq!(
            root.property(Token::Primary.name()).map(ToString::to_string),
            Some("var(--ds-sunset-base)".into())
        );
    }

    #[gpui::test]
    fn test_theme_changes_reach_the_root(cx: &mut TestAppContext) {
        let root = cx.update(|cx| init(cx, ThemeProps::default().theme(ThemeMode::Light)));

        cx.update(|cx| cx.set_theme_mode(ThemeMode::White)).unwrap();
        assert_eq!(
            root.borrow().attribute(THEME_ATTRIBUTE).map(ToString::to_string),
            Some("white".into())
        );
        assert!(!root.borrow().has_class(DARK_CLASS));
    }
}
