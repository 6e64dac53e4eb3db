//! Lifecycle events and their subscriber lists.
//!
//! The dispatch engine emits exactly two kinds of events: one when a command
//! ran to completion, one when the dispatch failed anywhere past command
//! resolution. Silent rejections (foreign token, unknown command) emit
//! nothing.
//!
//! Subscribers are awaited one after another, in subscription order. When a
//! list has no subscribers the engine skips building the event entirely.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::BoxFuture;
use parking_lot::RwLock;

use crate::context::ModalContext;
use crate::error::DispatchError;

/// Emitted after a command handler and its post-execution hook completed.
#[derive(Clone)]
pub struct CommandExecuted {
    /// The identifier token with the prefix stripped.
    pub modal_id: String,
    /// Name of the executed command.
    pub command: String,
    /// The dispatch context the handler ran with.
    pub ctx: Arc<ModalContext>,
    /// Always `true`: the submission was acknowledged.
    pub handled: bool,
}

/// Emitted when a dispatch failed after command resolution.
#[derive(Clone)]
pub struct CommandErrored {
    /// The identifier token with the prefix stripped.
    pub modal_id: String,
    /// Name of the resolved command.
    pub command: String,
    /// The dispatch context.
    pub ctx: Arc<ModalContext>,
    /// What went wrong. For handler failures the handler's original error is
    /// preserved as the source.
    pub error: Arc<DispatchError>,
    /// Always `false`: the failure was not handled by the extension.
    pub handled: bool,
}

/// Identifies one subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

type Callback<E> = Arc<dyn Fn(E) -> BoxFuture<'static, ()> + Send + Sync>;

/// An ordered list of asynchronous event subscribers.
pub struct Listeners<E> {
    callbacks: RwLock<Vec<(ListenerHandle, Callback<E>)>>,
    next_id: AtomicU64,
}

impl<E: Clone> Listeners<E> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Adds a subscriber; the returned handle removes it again.
    pub fn subscribe<F, Fut>(&self, f: F) -> ListenerHandle
    where
        F: Fn(E) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = ListenerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback<E> =
            Arc::new(move |event| -> BoxFuture<'static, ()> { Box::pin(f(event)) });
        self.callbacks.write().push((handle, callback));
        handle
    }

    /// Removes a subscriber, returning whether it was present.
    pub fn unsubscribe(&self, handle: ListenerHandle) -> bool {
        let mut callbacks = self.callbacks.write();
        let before = callbacks.len();
        callbacks.retain(|(h, _)| *h != handle);
        callbacks.len() != before
    }

    /// Whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    /// Awaits every subscriber in subscription order.
    pub(crate) async fn emit(&self, event: E) {
        let callbacks: Vec<Callback<E>> = self
            .callbacks
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(event.clone()).await;
        }
    }
}

impl<E: Clone> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn test_emit_runs_subscribers_in_order() {
        let listeners: Listeners<u32> = Listeners::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let first = Arc::clone(&seen);
        listeners.subscribe(move |event| {
            let seen = Arc::clone(&first);
            async move { seen.write().push(("first", event)) }
        });
        let second = Arc::clone(&seen);
        listeners.subscribe(move |event| {
            let seen = Arc::clone(&second);
            async move { seen.write().push(("second", event)) }
        });

        listeners.emit(7).await;
        assert_eq!(&*seen.read(), &[("first", 7), ("second", 7)]);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let listeners: Listeners<u32> = Listeners::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let handle = listeners.subscribe(move |_| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        listeners.emit(1).await;
        assert!(listeners.unsubscribe(handle));
        assert!(!listeners.unsubscribe(handle));
        listeners.emit(2).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(listeners.is_empty());
    }
}
