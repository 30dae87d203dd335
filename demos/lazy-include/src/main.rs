use lazyview::prelude::*;

use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    Logger::init();

    let namespace = Namespace::new();
    let hooks = namespace.hooks();
    let loader = TemplateLoader::new(hooks.clone());

    // "Import" the profile card only when something renders it.
    let scope = namespace.clone();
    loader
        .register("profile_card", move || {
            let scope = scope.clone();
            async move {
                // Stand-in for a code-split chunk fetch.
                tokio::time::sleep(Duration::from_millis(50)).await;

                scope.define(Template::new("profile_card", |content, _else_fn| {
                    View::new("profile_card", move || {
                        content.as_ref().and_then(|content| content())
                    })
                }));

                Ok(())
            }
        })
        .expect("register profile_card")
        .enable();

    info!("loader enabled: {}", loader.initialized());

    let root = View::empty("body");
    let resolution = hooks.lookup(&root, "profile_card", &LookupOptions::template());
    info!("first use is pending: {}", resolution.is_pending());

    let content: RenderFn = std::sync::Arc::new(|| Some(View::empty("avatar")));
    let placeholder = hooks.include(resolution, Some(content), None);
    info!(
        "placeholder rendered while loading: {:?}",
        placeholder.render().map(|view| view.name().to_string())
    );

    let mut changes = placeholder
        .pending_template()
        .expect("placeholder cell")
        .subscribe();
    changes
        .wait_for(|symbol| symbol.is_some())
        .await
        .expect("template arrives");

    let card = placeholder.render().expect("real template view");
    info!("placeholder re-rendered as: {}", card.name());
    info!(
        "card content: {}",
        card.render().expect("content view").name()
    );

    // Loaded once; later uses resolve synchronously.
    let resolution = hooks.lookup(&root, "profile_card", &LookupOptions::template());
    info!("second use is pending: {}", resolution.is_pending());
}
