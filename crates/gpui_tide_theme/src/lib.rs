//! Theme engine for the tide design system.
//!
//! A mounted [`ThemeProvider`] owns the active theme mode, the primary brand
//! color and the caller's custom tokens. Every change is committed to a
//! [`StyleSink`] as a theme attribute, a `dark` class and a set of `--ds-*`
//! custom properties, and components resolve tokens through the
//! [`Stylesheet`] cascade.

mod error;
pub use error::*;

mod kinds;
pub use kinds::*;

mod tokens;
pub use tokens::*;

pub mod values;

mod stylesheet;
pub use stylesheet::*;

mod sink;
pub use sink::*;

mod state;
pub use state::*;

mod context;
pub use context::*;
