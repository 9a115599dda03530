//! Notification plumbing between a media resource and whoever observes it.
//!
//! A resource owns a [`SignalHub`]; observers register a listener and get a
//! [`Subscription`] back. Dropping the subscription removes the listener, so
//! an observer can never outlive its registration.

use std::sync::{
    Arc, Mutex, Weak,
    atomic::{AtomicU64, Ordering},
};

use tracing::warn;

/// What a resource reports about itself, independently of any command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSignal {
    Started,
    Paused,
    Ended,
}

pub type Listener = Box<dyn Fn(ResourceSignal) + Send + Sync>;

type Listeners = Mutex<Vec<(u64, Arc<dyn Fn(ResourceSignal) + Send + Sync>)>>;

#[derive(Clone, Default)]
pub struct SignalHub {
    listeners: Arc<Listeners>,
    next_id: Arc<AtomicU64>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        match self.listeners.lock() {
            Ok(mut listeners) => listeners.push((id, Arc::from(listener))),
            Err(e) => warn!("couldn't register resource listener: {e}"),
        }
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Listeners run without the registry locked, so they may subscribe or
    /// drop subscriptions on this hub.
    pub fn emit(&self, signal: ResourceSignal) {
        let snapshot: Vec<_> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        for listener in snapshot {
            listener(signal);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Keeps a listener registered for as long as it is alive.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
