//! A collection of types which when imported make working with
//! lazily-loaded templates ergonomic.
//!
//! ```
//! use lazyview::prelude::*;
//! ```
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::loader::TemplateLoader;
pub use crate::logging::Logger;
pub use crate::runtime::{
    Hooks, Include, Lookup, LookupOptions, LookupRequest, Namespace, PendingLookup, ReactiveCell,
    RenderFn, Resolution, Symbol, Template, View,
};

pub use tokio;
