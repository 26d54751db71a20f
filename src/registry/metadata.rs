#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// The closed set of groups a registered component belongs to.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum ComponentCategory {
    #[assoc(as_str = "forms")]
    Forms,
    #[assoc(as_str = "layout")]
    Layout,
    #[assoc(as_str = "navigation")]
    Navigation,
    #[assoc(as_str = "feedback")]
    Feedback,
    #[assoc(as_str = "data-display")]
    DataDisplay,
    #[assoc(as_str = "utils")]
    Utils,
    #[assoc(as_str = "typography")]
    Typography,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 7] = [
        Self::Forms,
        Self::Layout,
        Self::Navigation,
        Self::Feedback,
        Self::DataDisplay,
        Self::Utils,
        Self::Typography,
    ];
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one registrable component.
///
/// `path` names the module holding the base implementation. When
/// `extended_path` is set the resolver loads that module instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub name: SharedString,
    pub description: SharedString,
    pub category: ComponentCategory,
    pub path: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_path: Option<SharedString>,
}

impl ComponentMetadata {
    pub fn new(
        name: impl Into<SharedString>,
        description: impl Into<SharedString>,
        category: ComponentCategory,
        path: impl Into<SharedString>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            path: path.into(),
            doc_url: None,
            extended_path: None,
        }
    }

    pub fn doc_url(mut self, doc_url: impl Into<SharedString>) -> Self {
        self.doc_url = Some(doc_url.into());
        self
    }

    pub fn extended_path(mut self, extended_path: impl Into<SharedString>) -> Self {
        self.extended_path = Some(extended_path.into());
        self
    }

    /// The module the resolver loads: the extended one when present.
    pub fn module_path(&self) -> &SharedString {
        self.extended_path.as_ref().unwrap_or(&self.path)
    }
}
