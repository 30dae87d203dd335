//! Integration surface between the loader and a view-rendering runtime.
//!
//! The runtime side of the contract is small: route name resolution through
//! a [`Lookup`] hook, route template inclusion through an [`Include`] hook,
//! and keep both in replaceable [`HookSlot`]s. Everything else here is the
//! currency those hooks trade in: [`Template`], [`View`], [`Symbol`] and
//! friends, plus the [`ReactiveCell`] placeholder views re-render from.
//!
//! [`Namespace`] is a working reference host: a template scope that
//! implements both hooks the way an un-intercepted runtime would.
//!
//! # Example
//!
//! ```
//! use lazyview::runtime::*;
//!
//! let namespace = Namespace::new();
//! namespace.define(Template::new("hello", |_content, _else_fn| {
//!     View::new("hello", || None)
//! }));
//!
//! let hooks = namespace.hooks();
//! let root = View::empty("root");
//!
//! let resolution = hooks.lookup(&root, "hello", &LookupOptions::template());
//! let view = hooks.include(resolution, None, None);
//! assert_eq!(view.name(), "hello");
//! ```
pub mod hooks;
pub mod namespace;
pub mod reactive;
pub mod resolution;
pub mod template;
pub mod view;

pub use hooks::{HookSlot, Hooks, Include, Lookup};
pub use namespace::Namespace;
pub use reactive::ReactiveCell;
pub use resolution::{LookupOptions, LookupRequest, PendingLookup, Resolution, Symbol};
pub use template::Template;
pub use view::{RenderFn, View};
