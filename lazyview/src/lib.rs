//! Lazyview resolves named view templates lazily: instead of defining every
//! template upfront, a name is registered with a load function that fetches
//! or defines the template on first use. The loader bridges the runtime's
//! synchronous, tree-shaped rendering with the asynchronous load by
//! intercepting two extension points: name resolution, where a registered
//! but unloaded name answers with a pending lookup instead of a template,
//! and template inclusion, where a pending lookup becomes a placeholder
//! view that re-renders once the load lands.
//!
//! # Getting started
//!
//! Route your runtime's name resolution and inclusion through a set of
//! [`runtime::Hooks`], then hand those hooks to a
//! [`loader::TemplateLoader`]:
//!
//! ```
//! use lazyview::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let namespace = Namespace::new();
//! let hooks = namespace.hooks();
//!
//! let loader = TemplateLoader::new(hooks.clone());
//! let scope = namespace.clone();
//!
//! loader
//!     .register("sidebar", move || {
//!         let scope = scope.clone();
//!         async move {
//!             scope.define(Template::new("sidebar", |_content, _else_fn| {
//!                 View::new("sidebar", || None)
//!             }));
//!             Ok(())
//!         }
//!     })
//!     .unwrap()
//!     .enable();
//!
//! // First use: resolution answers with a pending lookup.
//! let root = View::empty("root");
//! let resolution = hooks.lookup(&root, "sidebar", &LookupOptions::template());
//! assert!(resolution.is_pending());
//!
//! // Inclusion turns it into a placeholder that fills in by itself.
//! let placeholder = hooks.include(resolution, None, None);
//! let mut changes = placeholder.pending_template().unwrap().subscribe();
//! changes.wait_for(|symbol| symbol.is_some()).await.unwrap();
//! assert_eq!(placeholder.render().unwrap().name(), "sidebar");
//! # }
//! ```
//!
//! Already-loaded templates, unregistered names and non-template symbols
//! resolve exactly as they would without the loader installed, and
//! [`loader::TemplateLoader::disable`] restores the original hooks
//! verbatim.
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod prelude;
pub mod runtime;

pub use error::Error;
pub use loader::TemplateLoader;

/// Tokio is an asynchronous runtime for Rust.
pub use tokio;
