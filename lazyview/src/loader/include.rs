//! Inclusion interceptor.
//!
//! Wraps the inclusion directive captured from the runtime. Already-resolved
//! targets pass straight through. A pending target gets a placeholder view
//! that renders nothing for now, plus a background task that waits out the
//! load, redoes the lookup through whatever resolver is currently installed,
//! and drops the result into the placeholder's reactive cell. The subtree
//! re-renders; siblings and ancestors never waited.
use crate::runtime::{
    HookSlot, Include, Lookup, ReactiveCell, RenderFn, Resolution, Symbol, View,
};

use std::sync::Arc;
use tracing::error;

pub struct IncludeInterceptor {
    lookup: Arc<HookSlot<dyn Lookup>>,
    original: Arc<dyn Include>,
}

impl IncludeInterceptor {
    pub fn new(lookup: Arc<HookSlot<dyn Lookup>>, original: Arc<dyn Include>) -> Self {
        Self { lookup, original }
    }
}

impl Include for IncludeInterceptor {
    fn include(
        &self,
        target: Resolution,
        content: Option<RenderFn>,
        else_fn: Option<RenderFn>,
    ) -> View {
        let pending = match target {
            Resolution::Pending(pending) => pending,
            resolved => return self.original.include(resolved, content, else_fn),
        };

        let cell = ReactiveCell::new(None);

        let render_cell = cell.clone();
        let render_content = content.clone();
        let render_else = else_fn.clone();

        let view = View::new("include", move || {
            let symbol = render_cell.get()?;

            match symbol {
                Symbol::Template(template) => {
                    Some(template.construct_view(render_content.clone(), render_else.clone()))
                }
                Symbol::Missing => None,
                symbol => panic!("expected a template or nothing, found: {:?}", symbol),
            }
        })
        .new_lexical_scope()
        .template_cell(cell.clone());

        let lookup = self.lookup.clone();
        let placeholder = view.clone();

        tokio::spawn(async move {
            let request = match pending.await {
                Ok(request) => request,
                // Load failures are diagnostics, not recovery: the registry
                // entry stayed pending, so a later first-use retries.
                Err(err) => {
                    error!("{}", err);
                    return;
                }
            };

            match lookup
                .get()
                .lookup(&placeholder, &request.name, &request.options)
            {
                Resolution::Resolved(symbol) => cell.set(Some(symbol)),
                Resolution::Pending(_) => {
                    error!(
                        "template \"{}\" is still pending after its load completed",
                        request.name
                    );
                }
            }
        });

        view
    }
}
