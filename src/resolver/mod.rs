//! Loads component implementations for registered names.

mod loader;
pub use loader::*;

use std::{cell::RefCell, collections::HashMap};

use gpui::SharedString;
use thiserror::Error;

use crate::{
    components::{AnyComponent, module_table},
    registry::{ComponentRegistry, RegistryError, registry},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Lookup(#[from] RegistryError),

    #[error("Component does not have a default export: {0}")]
    NoDefaultExport(SharedString),

    #[error("Failed to load component: {0}")]
    LoadFailed(SharedString),
}

/// Resolves registered names to component implementations through a loader.
///
/// When the metadata names an extended implementation, that module is loaded
/// instead of the base one. There is no fallback to the base module.
pub struct ComponentResolver<'a, L: ComponentLoader> {
    registry: &'a ComponentRegistry,
    loader: L,
    cache: Option<RefCell<HashMap<SharedString, L::Component>>>,
}

impl<'a, L: ComponentLoader> ComponentResolver<'a, L> {
    pub fn new(registry: &'a ComponentRegistry, loader: L) -> Self {
        Self {
            registry,
            loader,
            cache: None,
        }
    }

    /// Remembers successful resolutions by registered name. Failures are not cached.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(RefCell::new(HashMap::new()));
        self
    }

    pub fn registry(&self) -> &'a ComponentRegistry {
        self.registry
    }

    pub async fn resolve(&self, name: &str) -> Result<L::Component, ResolveError> {
        let metadata = self.registry.get(name)?;

        if let Some(cache) = &self.cache
            && let Some(component) = cache.borrow().get(name)
        {
            tracing::debug!(name, "component resolved from cache");
            return Ok(component.clone());
        }

        let path = metadata.module_path();
        let name = SharedString::from(name.to_string());

        let module = match self.loader.load(path).await {
            Ok(module) => module,
            Err(err) => {
                tracing::debug!(%name, %path, "failed to load component: {err:#}");
                return Err(ResolveError::LoadFailed(name));
            }
        };

        let Some(component) = module.into_default_export() else {
            return Err(ResolveError::NoDefaultExport(name));
        };

        if let Some(cache) = &self.cache {
            cache.borrow_mut().insert(name, component.clone());
        }

        Ok(component)
    }
}

/// Resolves `name` against the bundled registry and the built-in components.
pub async fn resolve_component(name: &str) -> Result<AnyComponent, ResolveError> {
    ComponentResolver::new(registry(), module_table())
        .resolve(name)
        .await
}
