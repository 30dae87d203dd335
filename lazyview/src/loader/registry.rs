//! Registration bookkeeping.
//!
//! One entry per registered name. An entry starts out holding its load
//! function and ends up as a bare `Loaded` marker once the load succeeds,
//! releasing the function and everything it captured.
use crate::error::Error;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future a load function produces. Success means the template is now
/// defined where the original resolver can see it; the value itself is
/// discarded because resolution is redone afterwards.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

/// A registered load function. Invoked on first use, and again on a later
/// first use if the previous load failed.
pub type LoadFn = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

enum Entry {
    Pending(LoadFn),
    Loaded,
}

#[derive(Default)]
pub struct Registry {
    templates: HashMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load function for a name. The first registration wins;
    /// registering the same name again is a no-op, not an error.
    pub fn register(&mut self, name: &str, load: LoadFn) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::EmptyTemplateName);
        }

        self.templates
            .entry(name.to_string())
            .or_insert(Entry::Pending(load));

        Ok(())
    }

    /// Mark a name as loaded, dropping its load function. One-way: nothing
    /// ever flips an entry back.
    pub fn mark_loaded(&mut self, name: &str) {
        self.templates.insert(name.to_string(), Entry::Loaded);
    }

    /// The load function for a name that still needs loading.
    pub(crate) fn load_fn(&self, name: &str) -> Option<LoadFn> {
        match self.templates.get(name) {
            Some(Entry::Pending(load)) => Some(load.clone()),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn loaded(&self, name: &str) -> bool {
        matches!(self.templates.get(name), Some(Entry::Loaded))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|name| name.as_str())
    }
}
