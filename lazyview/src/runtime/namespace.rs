//! The template namespace.
//!
//! A shared map of names to symbols, standing in for the runtime's global
//! template scope. Load functions define templates here as a side effect,
//! which is what makes a second resolution of the same name succeed. The
//! namespace doubles as the reference implementation of both hooks: it
//! resolves names straight from the map and includes templates by
//! constructing their views in place.
use super::hooks::{Hooks, Include, Lookup};
use super::resolution::{LookupOptions, Resolution, Symbol};
use super::template::Template;
use super::view::{RenderFn, View};

use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default, Clone)]
pub struct Namespace {
    symbols: Arc<Mutex<HashMap<String, Symbol>>>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a template under its own name. Later definitions win, the way
    /// a runtime's template scope behaves.
    pub fn define(&self, template: Template) {
        self.symbols
            .lock()
            .insert(template.name().to_string(), Symbol::Template(template));
    }

    /// Define a non-template symbol, like a helper.
    pub fn define_helper(&self, name: impl ToString, value: impl Any + Send + Sync) {
        self.symbols
            .lock()
            .insert(name.to_string(), Symbol::Helper(Arc::new(value)));
    }

    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.lock().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.symbols.lock().keys().cloned().collect()
    }

    /// Hook slots routing both resolution and inclusion to this namespace.
    pub fn hooks(&self) -> Arc<Hooks> {
        Arc::new(Hooks::new(Arc::new(self.clone()), Arc::new(self.clone())))
    }
}

impl Lookup for Namespace {
    fn lookup(&self, _view: &View, name: &str, _options: &LookupOptions) -> Resolution {
        Resolution::Resolved(self.get(name).unwrap_or(Symbol::Missing))
    }
}

impl Include for Namespace {
    fn include(
        &self,
        target: Resolution,
        content: Option<RenderFn>,
        else_fn: Option<RenderFn>,
    ) -> View {
        match target {
            Resolution::Resolved(Symbol::Template(template)) => {
                template.construct_view(content, else_fn).new_lexical_scope()
            }
            Resolution::Resolved(Symbol::Missing) => View::empty("include"),
            Resolution::Resolved(symbol) => {
                panic!("expected a template or nothing, found: {:?}", symbol)
            }
            Resolution::Pending(_) => {
                panic!("expected a template or nothing, found: a pending lookup")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn greeting() -> Template {
        Template::new("greeting", |_content, _else_fn| View::empty("greeting"))
    }

    #[test]
    fn test_define_and_lookup() {
        let namespace = Namespace::new();
        let root = View::empty("root");

        let resolution = namespace.lookup(&root, "greeting", &LookupOptions::template());
        assert!(matches!(resolution, Resolution::Resolved(Symbol::Missing)));

        namespace.define(greeting());
        assert!(namespace.contains("greeting"));

        let resolution = namespace.lookup(&root, "greeting", &LookupOptions::template());
        let symbol = resolution.symbol().expect("resolved");
        assert_eq!(symbol.as_template().unwrap().name(), "greeting");
    }

    #[test]
    fn test_include_constructs_view() {
        let namespace = Namespace::new();
        namespace.define(greeting());

        let target = namespace.lookup(
            &View::empty("root"),
            "greeting",
            &LookupOptions::template(),
        );
        let view = namespace.include(target, None, None);

        assert_eq!(view.name(), "greeting");
        assert!(view.starts_new_lexical_scope());
    }

    #[test]
    fn test_include_missing_renders_nothing() {
        let namespace = Namespace::new();
        let target = namespace.lookup(&View::empty("root"), "absent", &LookupOptions::template());

        let view = namespace.include(target, None, None);
        assert!(view.render().is_none());
    }

    #[test]
    #[should_panic(expected = "expected a template or nothing")]
    fn test_include_helper_is_fatal() {
        let namespace = Namespace::new();
        namespace.define_helper("shout", |s: &str| s.to_uppercase());

        let target = namespace.lookup(&View::empty("root"), "shout", &LookupOptions::template());
        namespace.include(target, None, None);
    }
}
