//! Process-wide table binding widget model names to constructors and browser-side views.
//!
//! The host runtime instantiates widgets by model name; the renderer loads the view named by the
//! matching [`ViewBinding`]. Registration is explicit: the built-in map model is registered when
//! the global registry is first touched, and embedders may add their own bindings at process
//! initialization.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::map::Map;

static INSTANCE: OnceLock<ViewRegistry> = OnceLock::new();

/// Model name of the built-in map widget.
pub const MAP_MODEL: &str = "choromap.Map";

const MAP_VIEW_NAME: &str = "Map";
const MAP_VIEW_MODULE: &str = "nbextensions/choromap/Map";

/// Names the browser-side view implementing a widget model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBinding {
    view_name: String,
    view_module: String,
}

impl ViewBinding {
    /// Creates a binding from the view name and the frontend module that exports it.
    pub fn new(view_name: impl Into<String>, view_module: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            view_module: view_module.into(),
        }
    }

    /// Name of the view inside its module.
    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    /// Frontend module exporting the view.
    pub fn view_module(&self) -> &str {
        &self.view_module
    }
}

struct RegistryEntry {
    binding: ViewBinding,
    constructor: Box<dyn Fn() -> Map + Send + Sync>,
}

/// Table mapping widget model names to their view bindings and constructors.
#[derive(Default)]
pub struct ViewRegistry {
    entries: RwLock<HashMap<String, RegistryEntry>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry, with the built-in map model registered.
    pub fn global() -> &'static ViewRegistry {
        INSTANCE.get_or_init(|| {
            let registry = ViewRegistry::new();
            registry.register(
                MAP_MODEL,
                ViewBinding::new(MAP_VIEW_NAME, MAP_VIEW_MODULE),
                Map::default,
            );
            registry
        })
    }

    /// Registers a model under the given name.
    ///
    /// The first registration of a name wins; a repeated registration is ignored with a
    /// warning.
    pub fn register(
        &self,
        model_name: &str,
        binding: ViewBinding,
        constructor: impl Fn() -> Map + Send + Sync + 'static,
    ) {
        let mut entries = self.entries.write();
        if entries.contains_key(model_name) {
            log::warn!("model {model_name} is already registered. Second registration is ignored.");
            return;
        }

        log::debug!("registering view binding for model {model_name}");
        entries.insert(
            model_name.to_owned(),
            RegistryEntry {
                binding,
                constructor: Box::new(constructor),
            },
        );
    }

    /// View binding of the given model, if registered.
    pub fn binding(&self, model_name: &str) -> Option<ViewBinding> {
        self.entries
            .read()
            .get(model_name)
            .map(|entry| entry.binding.clone())
    }

    /// Constructs a fresh widget of the given model, if registered.
    pub fn instantiate(&self, model_name: &str) -> Option<Map> {
        self.entries
            .read()
            .get(model_name)
            .map(|entry| (entry.constructor)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttrValue, Attribute};

    #[test]
    fn registered_model_can_be_instantiated() {
        let registry = ViewRegistry::new();
        registry.register(
            "test.Map",
            ViewBinding::new("Map", "nbextensions/test/Map"),
            Map::default,
        );

        let map = registry.instantiate("test.Map").expect("model is registered");
        assert_eq!(*map.get(Attribute::MinWidth), AttrValue::Number(800.0));

        assert_eq!(
            registry.binding("test.Map"),
            Some(ViewBinding::new("Map", "nbextensions/test/Map"))
        );
    }

    #[test]
    fn unknown_model_yields_none() {
        let registry = ViewRegistry::new();
        assert!(registry.binding("test.Missing").is_none());
        assert!(registry.instantiate("test.Missing").is_none());
    }

    #[test]
    fn first_registration_wins() {
        let registry = ViewRegistry::new();
        registry.register(
            "test.Map",
            ViewBinding::new("Map", "nbextensions/first/Map"),
            Map::default,
        );
        registry.register(
            "test.Map",
            ViewBinding::new("Map", "nbextensions/second/Map"),
            Map::default,
        );

        assert_eq!(
            registry.binding("test.Map"),
            Some(ViewBinding::new("Map", "nbextensions/first/Map"))
        );
    }

    #[test]
    fn global_registry_knows_the_builtin_map() {
        let registry = ViewRegistry::global();

        let binding = registry.binding(MAP_MODEL).expect("built-in model is registered");
        assert_eq!(binding.view_name(), "Map");
        assert_eq!(binding.view_module(), "nbextensions/choromap/Map");

        assert!(registry.instantiate(MAP_MODEL).is_some());
    }
}
