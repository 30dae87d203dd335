use super::view::{RenderFn, View};

use std::fmt;
use std::sync::Arc;

/// A named, renderable unit recognized by the rendering runtime.
///
/// A template knows how to construct its own view, given the optional
/// content and else builders of the inclusion that references it.
#[derive(Clone)]
pub struct Template {
    name: String,
    construct: Arc<dyn Fn(Option<RenderFn>, Option<RenderFn>) -> View + Send + Sync>,
}

impl Template {
    pub fn new(
        name: impl ToString,
        construct: impl Fn(Option<RenderFn>, Option<RenderFn>) -> View + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            construct: Arc::new(construct),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the template's view as a child of the inclusion site.
    pub fn construct_view(&self, content: Option<RenderFn>, else_fn: Option<RenderFn>) -> View {
        (self.construct)(content, else_fn)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("name", &self.name).finish()
    }
}
