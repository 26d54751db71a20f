use std::rc::Rc;

use anyhow::anyhow;
use gpui::SharedString;
use indexmap::IndexMap;
use smol::future::{self, BoxedLocal, FutureExt};

/// A loaded module. Only its default export is consumed by the resolver.
pub struct Module<C> {
    default: Option<C>,
}

impl<C> Module<C> {
    pub fn with_default(default: C) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// A module that loads fine but exports nothing the resolver can use.
    pub fn empty() -> Self {
        Self { default: None }
    }

    pub fn default_export(&self) -> Option<&C> {
        self.default.as_ref()
    }

    pub fn into_default_export(self) -> Option<C> {
        self.default
    }
}

pub type LoadFuture<C> = BoxedLocal<anyhow::Result<Module<C>>>;

/// Asynchronously produces the module found at a path.
///
/// This is the capability the resolver is built on; implementations may load
/// from a static table, a plugin host or anything else that can answer a path.
pub trait ComponentLoader {
    type Component: Clone + 'static;

    fn load(&self, path: &str) -> LoadFuture<Self::Component>;
}

impl<L: ComponentLoader + ?Sized> ComponentLoader for Rc<L> {
    type Component = L::Component;

    fn load(&self, path: &str) -> LoadFuture<Self::Component> {
        (**self).load(path)
    }
}

type ModuleFactory<C> = Rc<dyn Fn() -> LoadFuture<C>>;

/// A loader backed by a table of module factories keyed by path.
pub struct ModuleTable<C> {
    factories: IndexMap<SharedString, ModuleFactory<C>>,
}

impl<C> Default for ModuleTable<C> {
    fn default() -> Self {
        Self {
            factories: IndexMap::default(),
        }
    }
}

impl<C: Clone + 'static> ModuleTable<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory whose future is created on every load.
    pub fn register(
        &mut self,
        path: impl Into<SharedString>,
        factory: impl Fn() -> LoadFuture<C> + 'static,
    ) -> &mut Self {
        self.factories.insert(path.into(), Rc::new(factory));
        self
    }

    /// Registers a module whose default export is `component`.
    pub fn register_default(&mut self, path: impl Into<SharedString>, component: C) -> &mut Self {
        self.register(path, move || {
            future::ready(Ok(Module::with_default(component.clone()))).boxed_local()
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.factories.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &SharedString> {
        self.factories.keys()
    }
}

impl<C: Clone + 'static> ComponentLoader for ModuleTable<C> {
    type Component = C;

    fn load(&self, path: &str) -> LoadFuture<C> {
        match self.factories.get(path) {
            Some(factory) => factory(),
            None => {
                let err = anyhow!("no module registered at path \"{path}\"");
                future::ready(Err(err)).boxed_local()
            }
        }
    }
}
