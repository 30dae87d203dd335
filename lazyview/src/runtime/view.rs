use super::reactive::ReactiveCell;
use super::resolution::Symbol;

use std::fmt;
use std::sync::Arc;

/// Shape of view render functions and of the content/else builders passed to
/// an inclusion. Returns the rendered child, or nothing.
pub type RenderFn = Arc<dyn Fn() -> Option<View> + Send + Sync>;

/// A node in the view tree.
///
/// Views are cheap to clone and safe to hand to background tasks; the render
/// function is shared, not copied.
#[derive(Clone)]
pub struct View {
    name: String,
    render: RenderFn,
    lexical_scope: bool,
    template_cell: Option<ReactiveCell<Option<Symbol>>>,
}

impl View {
    pub fn new(name: impl ToString, render: impl Fn() -> Option<View> + Send + Sync + 'static) -> Self {
        Self {
            name: name.to_string(),
            render: Arc::new(render),
            lexical_scope: false,
            template_cell: None,
        }
    }

    /// A view that renders nothing.
    pub fn empty(name: impl ToString) -> Self {
        Self::new(name, || None)
    }

    /// Mark this view as the root of a fresh lexical scope, the way the
    /// runtime scopes ordinary inclusions.
    pub fn new_lexical_scope(mut self) -> Self {
        self.lexical_scope = true;
        self
    }

    pub(crate) fn template_cell(mut self, cell: ReactiveCell<Option<Symbol>>) -> Self {
        self.template_cell = Some(cell);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starts_new_lexical_scope(&self) -> bool {
        self.lexical_scope
    }

    /// The cell a placeholder view renders from, set only on views created
    /// for a still-loading inclusion.
    pub fn pending_template(&self) -> Option<&ReactiveCell<Option<Symbol>>> {
        self.template_cell.as_ref()
    }

    /// Run the render function.
    pub fn render(&self) -> Option<View> {
        (self.render)()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("lexical_scope", &self.lexical_scope)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render() {
        let view = View::new("parent", || Some(View::empty("child")));
        let child = view.render().expect("child view");
        assert_eq!(child.name(), "child");
        assert!(child.render().is_none());
    }

    #[test]
    fn test_lexical_scope_flag() {
        let view = View::empty("include");
        assert!(!view.starts_new_lexical_scope());

        let view = view.new_lexical_scope();
        assert!(view.starts_new_lexical_scope());
    }
}
