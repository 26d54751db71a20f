use gpui::{
    BorrowAppContext,
    AbsoluteLength, App, DefiniteLength, FontWeight, Global, Rgba, SharedString, Subscription,
    Window, WindowAppearance, px, relative,
};

use crate::{
    PrimaryColor, StyleSink, StyleVariant, Stylesheet, ThemeError, ThemeMode, ThemeProps,
    ThemeSnapshot, ThemeState, Token, TokenMap,
    values::{
        parse_abs_length, parse_color, parse_font_family, parse_font_weight, parse_line_height,
    },
};

/// Whether a theme provider is available to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeContext<T> {
    NotProvided,
    Provided(T),
}

impl<T> ThemeContext<T> {
    pub fn is_provided(&self) -> bool {
        matches!(self, ThemeContext::Provided(_))
    }

    pub fn provided(self) -> Option<T> {
        match self {
            ThemeContext::Provided(value) => Some(value),
            ThemeContext::NotProvided => None,
        }
    }

    /// Fails with [`ThemeError::NotProvided`] outside a provider.
    pub fn require(self) -> Result<T, ThemeError> {
        self.provided().ok_or(ThemeError::NotProvided)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ThemeContext<U> {
        match self {
            ThemeContext::Provided(value) => ThemeContext::Provided(f(value)),
            ThemeContext::NotProvided => ThemeContext::NotProvided,
        }
    }
}

impl<T: Default> ThemeContext<T> {
    /// Falls back to the defaults a provider would mount with.
    pub fn unwrap_or_default(self) -> T {
        self.provided().unwrap_or_default()
    }
}

/// The mounted provider, stored as a gpui global.
pub struct ThemeProvider {
    state: ThemeState,
    stylesheet: Stylesheet,
    _appearance_subscription: Option<Subscription>,
}

impl Global for ThemeProvider {}

impl ThemeProvider {
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Whether a window's appearance changes are being forwarded to this provider.
    pub fn is_observing_appearance(&self) -> bool {
        self._appearance_subscription.is_some()
    }
}

pub fn is_dark_appearance(appearance: WindowAppearance) -> bool {
    matches!(
        appearance,
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

/// Extension trait for mounting, reading and driving the theme provider.
pub trait ThemeExt {
    /// Mounts a provider using the bundled stylesheet. Replaces any mounted
    /// provider but keeps its window appearance observer.
    fn mount_theme_provider(&mut self, props: ThemeProps, sink: impl StyleSink + 'static);

    /// Mounts a provider that resolves tokens through `stylesheet`.
    fn mount_theme_provider_with(
        &mut self,
        props: ThemeProps,
        stylesheet: Stylesheet,
        sink: impl StyleSink + 'static,
    );

    fn unmount_theme_provider(&mut self);

    fn theme_context(&self) -> ThemeContext<&ThemeState>;

    /// Theme, primary color and dark flag of the mounted provider.
    fn use_theme(&self) -> ThemeContext<ThemeSnapshot>;

    fn use_primary_color(&self) -> ThemeContext<PrimaryColor>;

    fn set_theme_mode(&mut self, theme: ThemeMode) -> Result<(), ThemeError>;

    fn set_primary_color(&mut self, primary_color: PrimaryColor) -> Result<(), ThemeError>;

    fn sync_theme_props(&mut self, props: ThemeProps) -> Result<(), ThemeError>;

    fn set_system_dark(&mut self, system_is_dark: bool) -> Result<(), ThemeError>;

    /// Resolves a token through the cascade. Without a provider the bundled
    /// stylesheet's default light values are used.
    fn theme_value(&self, token: Token) -> Option<SharedString>;

    /// Like [`ThemeExt::theme_value`], parsed as a color. Transparent when unresolved.
    fn theme_color(&self, token: Token) -> Rgba {
        self.theme_value(token)
            .and_then(|value| parse_color(&value))
            .unwrap_or(Rgba {
                r: 0.,
                g: 0.,
                b: 0.,
                a: 0.,
            })
    }

    /// Like [`ThemeExt::theme_value`], parsed as a length. Zero when unresolved.
    fn theme_length(&self, token: Token) -> AbsoluteLength {
        self.theme_value(token)
            .and_then(|value| parse_abs_length(&value))
            .unwrap_or(AbsoluteLength::Pixels(px(0.)))
    }

    /// Like [`ThemeExt::theme_value`], parsed as a line height. `1.5` when unresolved.
    fn theme_line_height(&self, token: Token) -> DefiniteLength {
        self.theme_value(token)
            .and_then(|value| parse_line_height(&value))
            .unwrap_or(relative(1.5))
    }

    fn theme_font_family(&self, token: Token) -> SharedString {
        self.theme_value(token)
            .and_then(|value| parse_font_family(&value).into_iter().next())
            .unwrap_or_else(|| SharedString::from("system-ui"))
    }

    fn theme_font_weight(&self, token: Token) -> FontWeight {
        self.theme_value(token)
            .and_then(|value| parse_font_weight(&value))
            .unwrap_or(FontWeight::NORMAL)
    }
}

impl ThemeExt for App {
    fn mount_theme_provider(&mut self, props: ThemeProps, sink: impl StyleSink + 'static) {
        self.mount_theme_provider_with(props, Stylesheet::bundled().clone(), sink)
    }

    fn mount_theme_provider_with(
        &mut self,
        props: ThemeProps,
        stylesheet: Stylesheet,
        sink: impl StyleSink + 'static,
    ) {
        let system_is_dark = is_dark_appearance(self.window_appearance());
        tracing::debug!(theme = %props.theme, system_is_dark, "mounting theme provider");

        // The appearance observer feeds whichever provider is mounted, so a
        // replacement inherits it.
        let appearance_subscription = self
            .has_global::<ThemeProvider>()
            .then(|| self.remove_global::<ThemeProvider>())
            .and_then(|previous| previous._appearance_subscription);

        self.set_global(ThemeProvider {
            state: ThemeState::mount(props, system_is_dark, sink),
            stylesheet,
            _appearance_subscription: appearance_subscription,
        });
    }

    fn unmount_theme_provider(&mut self) {
        if self.has_global::<ThemeProvider>() {
            self.remove_global::<ThemeProvider>();
        }
    }

    fn theme_context(&self) -> ThemeContext<&ThemeState> {
        match self.try_global::<ThemeProvider>() {
            Some(provider) => ThemeContext::Provided(&provider.state),
            None => ThemeContext::NotProvided,
        }
    }

    fn use_theme(&self) -> ThemeContext<ThemeSnapshot> {
        self.theme_context().map(ThemeState::snapshot)
    }

    fn use_primary_color(&self) -> ThemeContext<PrimaryColor> {
        self.theme_context().map(ThemeState::primary_color)
    }

    fn set_theme_mode(&mut self, theme: ThemeMode) -> Result<(), ThemeError> {
        update_state(self, |state| state.set_theme(theme))
    }

    fn set_primary_color(&mut self, primary_color: PrimaryColor) -> Result<(), ThemeError> {
        update_state(self, |state| state.set_primary_color(primary_color))
    }

    fn sync_theme_props(&mut self, props: ThemeProps) -> Result<(), ThemeError> {
        update_state(self, |state| state.sync_props(props))
    }

    fn set_system_dark(&mut self, system_is_dark: bool) -> Result<(), ThemeError> {
        update_state(self, |state| state.set_system_dark(system_is_dark))
    }

    fn theme_value(&self, token: Token) -> Option<SharedString> {
        match self.try_global::<ThemeProvider>() {
            Some(provider) => provider.state.resolve(&provider.stylesheet, token),
            None => Stylesheet::bundled().resolve(StyleVariant::Light, &TokenMap::new(), token),
        }
    }
}

fn update_state(cx: &mut App, f: impl FnOnce(&mut ThemeState)) -> Result<(), ThemeError> {
    if !cx.has_global::<ThemeProvider>() {
        return Err(ThemeError::NotProvided);
    }

    cx.update_global::<ThemeProvider, _>(|provider, _cx| f(&mut provider.state));
    Ok(())
}

/// Keeps the mounted provider's view of the OS appearance in sync with `window`.
///
/// The subscription is owned by the provider and dropped with it.
pub fn observe_system_appearance(window: &mut Window, cx: &mut App) -> Result<(), ThemeError> {
    if !cx.has_global::<ThemeProvider>() {
        return Err(ThemeError::NotProvided);
    }

    let system_is_dark = is_dark_appearance(window.appearance());
    let subscription = window.observe_window_appearance(|window, cx| {
        let system_is_dark = is_dark_appearance(window.appearance());
        // Provider may have been unmounted since subscribing.
        let _ = cx.set_system_dark(system_is_dark);
    });

    cx.update_global::<ThemeProvider, _>(|provider, _cx| {
        provider.state.set_system_dark(system_is_dark);
        provider._appearance_subscription = Some(subscription);
    });

    Ok(())
}
