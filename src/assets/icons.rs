#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> &'static str)]
pub enum TideIconKind {
    #[assoc(path = "icons/info.svg")]
    Info,

    /// Confirmations and successful outcomes.
    #[assoc(path = "icons/check.svg")]
    Check,

    #[assoc(path = "icons/warning.svg")]
    Warning,

    /// Errors and destructive outcomes.
    #[assoc(path = "icons/danger.svg")]
    Danger,

    /// Rotated while a button is loading.
    #[assoc(path = "icons/spinner.svg")]
    Spinner,

    #[assoc(path = "icons/arrow_right.svg")]
    ArrowRight,
}

impl TideIconKind {
    pub const ALL: [Self; 6] = [
        Self::Info,
        Self::Check,
        Self::Warning,
        Self::Danger,
        Self::Spinner,
        Self::ArrowRight,
    ];
}

impl From<TideIconKind> for SharedString {
    fn from(kind: TideIconKind) -> Self {
        SharedString::new_static(kind.path())
    }
}
