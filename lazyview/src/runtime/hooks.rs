//! The two extension points a rendering runtime exposes.
//!
//! A runtime routes every name resolution through its [`Lookup`] hook and
//! every template inclusion through its [`Include`] hook. Both live in
//! replaceable [`HookSlot`]s so an implementation can be captured, wrapped
//! by a decorator, and later restored verbatim.
use super::resolution::{LookupOptions, Resolution};
use super::view::{RenderFn, View};

use parking_lot::Mutex;
use std::sync::Arc;

/// Name resolution: maps a referenced name to a template or other symbol
/// within the given view's scope.
pub trait Lookup: Send + Sync {
    fn lookup(&self, view: &View, name: &str, options: &LookupOptions) -> Resolution;
}

/// Template inclusion: embeds a resolved template as a child of the current
/// view, given optional content/else builders.
pub trait Include: Send + Sync {
    fn include(
        &self,
        target: Resolution,
        content: Option<RenderFn>,
        else_fn: Option<RenderFn>,
    ) -> View;
}

/// A replaceable slot holding the current implementation of a hook.
pub struct HookSlot<H: ?Sized> {
    hook: Mutex<Arc<H>>,
}

impl<H: ?Sized> HookSlot<H> {
    pub fn new(hook: Arc<H>) -> Self {
        Self {
            hook: Mutex::new(hook),
        }
    }

    /// The currently installed hook.
    pub fn get(&self) -> Arc<H> {
        self.hook.lock().clone()
    }

    /// Install a new hook, returning the previous one so it can be called
    /// through to or restored later.
    pub fn replace(&self, hook: Arc<H>) -> Arc<H> {
        std::mem::replace(&mut *self.hook.lock(), hook)
    }
}

/// The pair of hook slots a runtime routes rendering through.
pub struct Hooks {
    pub lookup: Arc<HookSlot<dyn Lookup>>,
    pub include: Arc<HookSlot<dyn Include>>,
}

impl Hooks {
    pub fn new(lookup: Arc<dyn Lookup>, include: Arc<dyn Include>) -> Self {
        Self {
            lookup: Arc::new(HookSlot::new(lookup)),
            include: Arc::new(HookSlot::new(include)),
        }
    }

    /// Resolve a name through the currently installed lookup hook.
    pub fn lookup(&self, view: &View, name: &str, options: &LookupOptions) -> Resolution {
        self.lookup.get().lookup(view, name, options)
    }

    /// Evaluate an inclusion through the currently installed include hook.
    pub fn include(
        &self,
        target: Resolution,
        content: Option<RenderFn>,
        else_fn: Option<RenderFn>,
    ) -> View {
        self.include.get().include(target, content, else_fn)
    }
}
