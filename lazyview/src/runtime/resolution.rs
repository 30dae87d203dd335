//! What name resolution produces.
//!
//! Resolution has exactly two outcomes: a symbol the resolver found right
//! away, or a pending lookup that has to be redone once a template finishes
//! loading. The two are kept as explicit variants of [`Resolution`] so
//! downstream code dispatches on the tag instead of guessing at types.
use super::template::Template;
use crate::error::Error;

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Per-call resolution options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Resolve the name as a template reference.
    pub template: bool,
}

impl LookupOptions {
    /// Options for a template reference.
    pub fn template() -> Self {
        Self { template: true }
    }
}

/// A symbol the resolver produced synchronously.
#[derive(Clone)]
pub enum Symbol {
    /// A renderable template.
    Template(Template),
    /// Any non-template symbol in scope, like a helper. Opaque to this
    /// crate; it only ever passes through.
    Helper(Arc<dyn Any + Send + Sync>),
    /// The name did not resolve to anything.
    Missing,
}

impl Symbol {
    pub fn is_template(&self) -> bool {
        matches!(self, Symbol::Template(_))
    }

    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Symbol::Template(template) => Some(template),
            _ => None,
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Template(template) => write!(f, "a template ({})", template.name()),
            Symbol::Helper(_) => write!(f, "a non-template symbol"),
            Symbol::Missing => write!(f, "nothing"),
        }
    }
}

/// The name and options needed to redo a lookup after its template loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: String,
    pub options: LookupOptions,
}

/// A lookup still waiting on its template to load.
///
/// Resolves to the [`LookupRequest`] to replay, or to the load error.
pub struct PendingLookup {
    future: Pin<Box<dyn Future<Output = Result<LookupRequest, Error>> + Send>>,
}

impl PendingLookup {
    pub fn new(future: impl Future<Output = Result<LookupRequest, Error>> + Send + 'static) -> Self {
        Self {
            future: Box::pin(future),
        }
    }
}

impl Future for PendingLookup {
    type Output = Result<LookupRequest, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().future.as_mut().poll(cx)
    }
}

impl fmt::Debug for PendingLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLookup").finish_non_exhaustive()
    }
}

/// Outcome of a name resolution call.
#[derive(Debug)]
pub enum Resolution {
    /// The resolver answered synchronously.
    Resolved(Symbol),
    /// The name refers to a registered template that is still loading.
    Pending(PendingLookup),
}

impl Resolution {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending(_))
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Resolution::Resolved(symbol) => Some(symbol),
            Resolution::Pending(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::view::View;
    use super::*;

    #[tokio::test]
    async fn test_pending_lookup_resolves() {
        let pending = PendingLookup::new(async {
            Ok(LookupRequest {
                name: "sidebar".into(),
                options: LookupOptions::template(),
            })
        });

        let request = pending.await.expect("lookup request");
        assert_eq!(request.name, "sidebar");
        assert!(request.options.template);
    }

    #[test]
    fn test_symbol_accessors() {
        let template = Template::new("card", |_content, _else_fn| View::empty("card"));
        let symbol = Symbol::Template(template);
        assert!(symbol.is_template());
        assert_eq!(symbol.as_template().unwrap().name(), "card");

        assert!(!Symbol::Missing.is_template());
        assert!(Symbol::Missing.as_template().is_none());
    }
}
