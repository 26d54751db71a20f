//! Tide is a small design system for gpui: a static registry of components,
//! a resolver that loads them by name and a theme provider that drives
//! their tokens.

pub use gpui_tide_theme as theme;

pub mod registry;

pub mod resolver;

pub mod components;

mod utils;
pub use utils::RgbaExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
