//! Lazy template loading.
//!
//! Templates registered with a [`TemplateLoader`] aren't defined upfront;
//! each one carries a load function that runs on first use. While a load is
//! in flight, the affected inclusion renders a placeholder and the rest of
//! the tree carries on. Once the load lands, resolution is redone and the
//! placeholder re-renders with the real template.
//!
//! # Example
//!
//! ```
//! use lazyview::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let namespace = Namespace::new();
//! let hooks = namespace.hooks();
//! let loader = TemplateLoader::new(hooks.clone());
//!
//! let scope = namespace.clone();
//! loader
//!     .register("profile", move || {
//!         let scope = scope.clone();
//!         async move {
//!             // Fetch, import, code-split... anything that ends with the
//!             // template defined in the resolver's scope.
//!             scope.define(Template::new("profile", |_content, _else_fn| {
//!                 View::new("profile", || None)
//!             }));
//!             Ok(())
//!         }
//!     })
//!     .unwrap()
//!     .enable();
//!
//! let root = View::empty("root");
//! let resolution = hooks.lookup(&root, "profile", &LookupOptions::template());
//! assert!(resolution.is_pending());
//!
//! let placeholder = hooks.include(resolution, None, None);
//! let mut changes = placeholder.pending_template().unwrap().subscribe();
//! changes.wait_for(|symbol| symbol.is_some()).await.unwrap();
//!
//! assert_eq!(placeholder.render().unwrap().name(), "profile");
//! # }
//! ```
pub mod include;
pub mod lookup;
pub mod registry;

pub use include::IncludeInterceptor;
pub use lookup::LookupInterceptor;
pub use registry::{LoadFn, LoadFuture, Registry};

use crate::error::Error;
use crate::runtime::{Hooks, Include, Lookup};

use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Registers templates for loading at lookup time and owns the lifecycle of
/// the two interceptors.
///
/// The hook implementations present when the loader is constructed are
/// treated as the originals: [`enable`](Self::enable) wraps them,
/// [`disable`](Self::disable) puts them back.
pub struct TemplateLoader {
    registry: Arc<Mutex<Registry>>,
    hooks: Arc<Hooks>,
    original_lookup: Arc<dyn Lookup>,
    original_include: Arc<dyn Include>,
    initialized: AtomicBool,
}

impl TemplateLoader {
    pub fn new(hooks: Arc<Hooks>) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
            original_lookup: hooks.lookup.get(),
            original_include: hooks.include.get(),
            hooks,
            initialized: AtomicBool::new(false),
        }
    }

    /// Register a template for loading on first use.
    ///
    /// The load function runs when the template's name is first resolved
    /// after [`enable`](Self::enable); on success the name is marked loaded
    /// and never loads again. If two first-uses race before either load
    /// settles, both invoke the load function.
    ///
    /// The first registration of a name wins; registering it again is a
    /// no-op. An empty name is an error and registers nothing.
    pub fn register<F, Fut>(&self, name: &str, load: F) -> Result<&Self, Error>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), Error>> + Send + 'static,
    {
        let load: LoadFn = Arc::new(move || -> LoadFuture { Box::pin(load()) });
        self.registry.lock().register(name, load)?;

        Ok(self)
    }

    /// Register a template with a synchronous load function.
    ///
    /// The result, error included, surfaces through the same pending future
    /// an asynchronous load produces.
    pub fn register_sync<F>(&self, name: &str, load: F) -> Result<&Self, Error>
    where
        F: Fn() -> Result<(), Error> + Send + Sync + 'static,
    {
        let load: LoadFn = Arc::new(move || -> LoadFuture {
            let result = load();
            Box::pin(std::future::ready(result))
        });
        self.registry.lock().register(name, load)?;

        Ok(self)
    }

    /// Install both interceptors. Idempotent: enabling an enabled loader
    /// changes nothing.
    pub fn enable(&self) -> &Self {
        if !self.initialized.load(Ordering::Acquire) {
            let lookup = Arc::new(LookupInterceptor::new(
                self.registry.clone(),
                self.original_lookup.clone(),
            ));
            let include = Arc::new(IncludeInterceptor::new(
                self.hooks.lookup.clone(),
                self.original_include.clone(),
            ));

            self.hooks.lookup.replace(lookup);
            self.hooks.include.replace(include);
            self.initialized.store(true, Ordering::Release);
        }

        self
    }

    /// Put the original hooks back, exactly as captured. Idempotent.
    pub fn disable(&self) -> &Self {
        if self.initialized.load(Ordering::Acquire) {
            self.hooks.lookup.replace(self.original_lookup.clone());
            self.hooks.include.replace(self.original_include.clone());
            self.initialized.store(false, Ordering::Release);
        }

        self
    }

    /// Whether the interceptors are currently installed.
    pub fn initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Whether a name has been registered with this loader.
    pub fn registered(&self, name: &str) -> bool {
        self.registry.lock().contains(name)
    }

    /// Whether a registered name has finished loading.
    pub fn loaded(&self, name: &str) -> bool {
        self.registry.lock().loaded(name)
    }
}
