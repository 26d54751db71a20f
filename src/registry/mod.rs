//! Static catalog of the components this crate can resolve.
//!
//! The built-in registry is parsed once from an embedded manifest and never
//! changes afterwards. Lookups are synchronous and free of side effects.

mod metadata;
pub use metadata::*;

use std::sync::LazyLock;

use gpui::SharedString;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

static BUILTIN: LazyLock<ComponentRegistry> = LazyLock::new(|| {
    ComponentRegistry::from_json(include_str!("../../manifest/components.json"))
        .expect("the bundled component manifest is valid json")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Component \"{0}\" not found in registry")]
    NotFound(SharedString),
}

/// Maps registered names (camelCase by convention) to component metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    entries: IndexMap<SharedString, ComponentMetadata>,
}

impl ComponentRegistry {
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }

    pub fn get(&self, name: &str) -> Result<&ComponentMetadata, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(SharedString::from(name.to_string())))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries whose category equals `category`. Empty when nothing matches.
    pub fn by_category(&self, category: ComponentCategory) -> Vec<&ComponentMetadata> {
        self.entries
            .values()
            .filter(|metadata| metadata.category == category)
            .collect()
    }

    /// The distinct categories used by at least one entry.
    pub fn categories(&self) -> Vec<ComponentCategory> {
        self.entries
            .values()
            .map(|metadata| metadata.category)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SharedString, &ComponentMetadata)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<SharedString>> FromIterator<(N, ComponentMetadata)> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = (N, ComponentMetadata)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, metadata)| (name.into(), metadata))
                .collect(),
        }
    }
}

/// The registry bundled with the crate.
pub fn registry() -> &'static ComponentRegistry {
    &BUILTIN
}

pub fn get_component_metadata(name: &str) -> Result<&'static ComponentMetadata, RegistryError> {
    registry().get(name)
}

pub fn get_components_by_category(category: ComponentCategory) -> Vec<&'static ComponentMetadata> {
    registry().by_category(category)
}

pub fn get_component_categories() -> Vec<ComponentCategory> {
    registry().categories()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentRegistry {
        ComponentRegistry::from_iter([
            (
                "button",
                ComponentMetadata::new("Button", "Clicks", ComponentCategory::Forms, "button"),
            ),
            (
                "input",
                ComponentMetadata::new("Input", "Types", ComponentCategory::Forms, "input"),
            ),
            (
                "card",
                ComponentMetadata::new("Card", "Groups", ComponentCategory::Layout, "card"),
            ),
        ])
    }

    #[test]
    fn test_bundled_manifest_parses() {
        assert!(!registry().is_empty());
        assert!(registry().contains("button"));
    }

    #[test]
    fn test_lookup_returns_registered_metadata() {
        for (name, metadata) in registry().iter() {
            assert_eq!(get_component_metadata(name).unwrap(), metadata);
        }
    }

    #[test]
    fn test_lookup_of_missing_name_fails() {
        let err = get_component_metadata("doesNotExist").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("doesNotExist".into()));
        assert!(err.to_string().contains("doesNotExist"));
    }

    #[test]
    fn test_by_category_matches_filter() {
        for category in ComponentCategory::ALL {
            let expected: Vec<&ComponentMetadata> = registry()
                .iter()
                .map(|(_, metadata)| metadata)
                .filter(|metadata| metadata.category == category)
                .collect();

            assert_eq!(get_components_by_category(category), expected);
        }
    }

    #[test]
    fn test_by_category_without_matches_is_empty() {
        assert!(get_components_by_category(ComponentCategory::Utils).is_empty());
        assert!(sample().by_category(ComponentCategory::Feedback).is_empty());
    }

    #[test]
    fn test_categories_are_distinct_and_complete() {
        let registry = sample();
        let mut categories = registry.categories();
        categories.sort_by_key(|category| category.as_str());
        assert_eq!(
            categories,
            vec![ComponentCategory::Forms, ComponentCategory::Layout]
        );

        let builtin = get_component_categories();
        for (_, metadata) in super::registry().iter() {
            assert!(builtin.contains(&metadata.category));
        }
        for category in &builtin {
            assert_eq!(builtin.iter().filter(|c| *c == category).count(), 1);
        }
    }

    #[test]
    fn test_builtin_button_has_extended_path() {
        let button = get_component_metadata("button").unwrap();
        assert_eq!(button.category, ComponentCategory::Forms);
        assert!(button.extended_path.is_some());
    }

    #[test]
    fn test_invalid_manifest_is_rejected() {
        assert!(ComponentRegistry::from_json(r#"{"x":{"name":"X"}}"#).is_err());
        assert!(
            ComponentRegistry::from_json(
                r#"{"x":{"name":"X","description":"","category":"charts","path":"x"}}"#
            )
            .is_err()
        );
    }
}
