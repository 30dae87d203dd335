//! Name resolution interceptor.
//!
//! Wraps the resolver captured from the runtime. Most calls pass straight
//! through; the interesting case is a template reference whose name is
//! registered but not yet loaded. The interceptor kicks off the load right
//! away and answers with a pending lookup that, once the load lands, marks
//! the registry and yields the name and options so resolution can be redone
//! through the resolver's full logic.
use super::registry::Registry;
use crate::config::get_config;
use crate::error::Error;
use crate::runtime::{Lookup, LookupOptions, LookupRequest, PendingLookup, Resolution, View};

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

pub struct LookupInterceptor {
    registry: Arc<Mutex<Registry>>,
    original: Arc<dyn Lookup>,
}

impl LookupInterceptor {
    pub fn new(registry: Arc<Mutex<Registry>>, original: Arc<dyn Lookup>) -> Self {
        Self { registry, original }
    }
}

impl Lookup for LookupInterceptor {
    fn lookup(&self, view: &View, name: &str, options: &LookupOptions) -> Resolution {
        if !options.template {
            return self.original.lookup(view, name, options);
        }

        // Unregistered names and already-loaded templates resolve exactly
        // as if this interceptor wasn't installed. The lock covers only the
        // map access, not the delegated call.
        let load = { self.registry.lock().load_fn(name) };

        let load = match load {
            Some(load) => load,
            None => return self.original.lookup(view, name, options),
        };

        if get_config().log_loads {
            info!("template \"{}\" load started", name);
        }

        // Start the load now; only the wait is deferred.
        let future = load();

        let registry = self.registry.clone();
        let request = LookupRequest {
            name: name.to_string(),
            options: options.clone(),
        };

        Resolution::Pending(PendingLookup::new(async move {
            match future.await {
                Ok(()) => {
                    registry.lock().mark_loaded(&request.name);

                    if get_config().log_loads {
                        info!("template \"{}\" loaded", request.name);
                    }

                    Ok(request)
                }
                // The entry keeps its load function, so the next first-use
                // starts over.
                Err(err) => Err(Error::Load {
                    name: request.name,
                    source: Box::new(err),
                }),
            }
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loader::registry::{LoadFn, LoadFuture};
    use crate::runtime::{Namespace, Symbol, Template};

    fn interceptor(namespace: &Namespace) -> (LookupInterceptor, Arc<Mutex<Registry>>) {
        let registry = Arc::new(Mutex::new(Registry::new()));
        let interceptor =
            LookupInterceptor::new(registry.clone(), Arc::new(namespace.clone()));

        (interceptor, registry)
    }

    fn defining_load(namespace: &Namespace, name: &'static str) -> LoadFn {
        let namespace = namespace.clone();
        Arc::new(move || -> LoadFuture {
            let namespace = namespace.clone();
            Box::pin(async move {
                tokio::task::yield_now().await;
                namespace.define(Template::new(name, move |_content, _else_fn| {
                    View::empty(name)
                }));
                Ok(())
            })
        })
    }

    #[test]
    fn test_non_template_lookups_pass_through() {
        let namespace = Namespace::new();
        namespace.define_helper("shout", ());

        let (interceptor, registry) = interceptor(&namespace);
        registry
            .lock()
            .register("shout", defining_load(&namespace, "shout"))
            .expect("register");

        let resolution = interceptor.lookup(
            &View::empty("root"),
            "shout",
            &LookupOptions::default(),
        );
        assert!(matches!(
            resolution,
            Resolution::Resolved(Symbol::Helper(_))
        ));
    }

    #[test]
    fn test_unregistered_names_pass_through() {
        let namespace = Namespace::new();
        let (interceptor, _registry) = interceptor(&namespace);

        let resolution = interceptor.lookup(
            &View::empty("root"),
            "absent",
            &LookupOptions::template(),
        );
        assert!(matches!(resolution, Resolution::Resolved(Symbol::Missing)));
    }

    #[tokio::test]
    async fn test_first_use_loads_then_passes_through() {
        let namespace = Namespace::new();
        let (interceptor, registry) = interceptor(&namespace);
        registry
            .lock()
            .register("sidebar", defining_load(&namespace, "sidebar"))
            .expect("register");

        let root = View::empty("root");
        let options = LookupOptions::template();

        let pending = match interceptor.lookup(&root, "sidebar", &options) {
            Resolution::Pending(pending) => pending,
            resolved => panic!("expected a pending lookup, got {:?}", resolved),
        };

        let request = pending.await.expect("load succeeds");
        assert_eq!(
            request,
            LookupRequest {
                name: "sidebar".into(),
                options: options.clone(),
            }
        );
        assert!(registry.lock().loaded("sidebar"));

        // Redoing the lookup takes the pass-through path now.
        let resolution = interceptor.lookup(&root, &request.name, &request.options);
        let symbol = resolution.symbol().expect("resolved synchronously");
        assert_eq!(symbol.as_template().unwrap().name(), "sidebar");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_entry_pending() {
        let namespace = Namespace::new();
        let (interceptor, registry) = interceptor(&namespace);

        let load: LoadFn = Arc::new(|| -> LoadFuture {
            Box::pin(std::future::ready(Err(Error::Error(
                "network down".into(),
            ))))
        });
        registry.lock().register("sidebar", load).expect("register");

        let root = View::empty("root");
        let options = LookupOptions::template();

        // A synchronously-failing load still surfaces through the future.
        let pending = match interceptor.lookup(&root, "sidebar", &options) {
            Resolution::Pending(pending) => pending,
            resolved => panic!("expected a pending lookup, got {:?}", resolved),
        };

        let err = pending.await.expect_err("load fails");
        assert!(err.to_string().contains("sidebar"));
        assert!(!registry.lock().loaded("sidebar"));

        // The next first-use retries from scratch.
        assert!(interceptor.lookup(&root, "sidebar", &options).is_pending());
    }
}
