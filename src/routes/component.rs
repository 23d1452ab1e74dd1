//! View components attached to routes.
//!
//! A route either carries its view directly or a deferred loader that
//! produces the view the first time the route is navigated to.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::LoadError;

type LoadFuture<V> = BoxFuture<'static, Result<V, LoadError>>;

#[derive(Clone)]
pub enum Component<V> {
    /// Resolved at startup; navigation never suspends.
    Direct(V),
    /// Resolved on first navigation.
    Deferred(DeferredLoader<V>),
}

impl<V> Component<V> {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Component::Deferred(_))
    }
}

impl<V: fmt::Debug> fmt::Debug for Component<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Direct(view) => f.debug_tuple("Direct").field(view).finish(),
            Component::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A zero-argument async loader whose first successful result is kept.
///
/// Concurrent callers share one in-flight load. A failed load is forgotten so
/// the next call runs the loader again.
pub struct DeferredLoader<V> {
    inner: Arc<LoaderInner<V>>,
}

struct LoaderInner<V> {
    load: Box<dyn Fn() -> LoadFuture<V> + Send + Sync>,
    slot: Mutex<Option<Shared<LoadFuture<V>>>>,
}

impl<V> Clone for DeferredLoader<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> DeferredLoader<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(LoaderInner {
                load: Box::new(move || load().boxed()),
                slot: Mutex::new(None),
            }),
        }
    }

    /// Returns the loaded view, running the loader only if no earlier call
    /// has succeeded or is still pending.
    pub async fn load(&self) -> Result<V, LoadError> {
        let pending = {
            let mut slot = self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.get_or_insert_with(|| (self.inner.load)().shared())
                .clone()
        };

        let result = pending.clone().await;

        if result.is_err() {
            let mut slot = self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner);
            // Another caller may already have started a fresh attempt.
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&pending)) {
                *slot = None;
            }
        }

        result
    }

    /// True once a load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        let slot = self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner);
        matches!(slot.as_ref().and_then(Shared::peek), Some(Ok(_)))
    }
}
