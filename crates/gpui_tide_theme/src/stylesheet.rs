use std::sync::LazyLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use crate::{StyleVariant, ThemeError, Token, TokenMap, values::parse_var};

/// Maximum number of `var(...)` hops followed before giving up on a value.
const MAX_REFERENCE_DEPTH: usize = 8;

static DEFAULT: LazyLock<Stylesheet> = LazyLock::new(|| {
    Stylesheet::from_json(include_str!("../stylesheets/tide.json"))
        .expect("the bundled stylesheet is valid json")
});

/// The token values that consume the custom properties a theme provider writes.
///
/// Values are looked up through a cascade: inline properties first, then the
/// active variant, then `root`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stylesheet {
    pub name: SharedString,
    pub root: TokenMap,
    pub variants: StylesheetVariants,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StylesheetVariants {
    pub light: TokenMap,
    pub white: TokenMap,
    pub dark: TokenMap,
}

impl StylesheetVariants {
    pub fn get(&self, variant: StyleVariant) -> &TokenMap {
        match variant {
            StyleVariant::Light => &self.light,
            StyleVariant::White => &self.white,
            StyleVariant::Dark => &self.dark,
        }
    }
}

impl Stylesheet {
    /// The stylesheet bundled with the crate.
    pub fn bundled() -> &'static Stylesheet {
        &DEFAULT
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Stylesheet, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    /// Looks up the raw value of `token` without following references.
    pub fn lookup<'a>(
        &'a self,
        variant: StyleVariant,
        inline: &'a TokenMap,
        token: Token,
    ) -> Option<&'a SharedString> {
        inline
            .get(&token)
            .or_else(|| self.variants.get(variant).get(&token))
            .or_else(|| self.root.get(&token))
    }

    /// Resolves `token` to a concrete value, following `var(...)` references.
    ///
    /// A reference whose token has no value falls back to the value after its
    /// comma, if any. Returns `None` for tokens without a value, for
    /// references with nothing to fall back to and for reference chains that
    /// do not terminate.
    pub fn resolve(
        &self,
        variant: StyleVariant,
        inline: &TokenMap,
        token: Token,
    ) -> Option<SharedString> {
        let mut value = self.lookup(variant, inline, token)?.clone();

        for _ in 0..=MAX_REFERENCE_DEPTH {
            let Some(reference) = parse_var(&value) else {
                return Some(value);
            };

            let next = reference
                .token
                .and_then(|next| self.lookup(variant, inline, next))
                .cloned();

            value = match (next, reference.fallback) {
                (Some(next), _) => next,
                (None, Some(fallback)) => SharedString::from(fallback.to_string()),
                (None, None) => {
                    tracing::debug!(token = token.name(), %value, "unresolved token reference");
                    return None;
                }
            };
        }

        tracing::debug!(token = token.name(), "token reference chain too deep");
        None
    }
}
