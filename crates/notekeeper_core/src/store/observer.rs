//! Subscriber registry for store change notifications.
//!
//! # Responsibility
//! - Hold change callbacks registered by presentation components.
//! - Deliver one synchronous notification per applied mutation.
//!
//! # Invariants
//! - Subscribers are notified in registration order.
//! - `SubscriptionId` values are never reused within one registry.
//! - Removing a subscriber takes effect before the next notification.
//! - A weak subscriber whose target was dropped is removed on the next
//!   notification and never invoked again.

use crate::model::note::{Note, NoteId};
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Weak};

/// Kind of mutation that produced a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// A note was appended.
    Added(NoteId),
    /// A note had its title and content replaced.
    Updated(NoteId),
    /// Notes were removed, listed in their pre-removal order.
    Deleted(Vec<NoteId>),
}

/// Change event handed to subscribers after a mutation.
#[derive(Debug, Clone, Copy)]
pub struct NoteChange<'a> {
    pub kind: &'a ChangeKind,
    /// Full post-mutation sequence in display order.
    pub notes: &'a [Note],
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Keep,
    Prune,
}

type Callback = Box<dyn FnMut(&NoteChange<'_>) -> Delivery + Send + 'static>;

fn boxed<F>(callback: F) -> Callback
where
    F: FnMut(&NoteChange<'_>) -> Delivery + Send + 'static,
{
    Box::new(callback)
}

/// Ordered list of change callbacks.
#[derive(Default)]
pub struct ObserverRegistry {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one callback and returns its handle.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&NoteChange<'_>) + Send + 'static,
    {
        self.register(boxed(move |change| {
            callback(change);
            Delivery::Keep
        }))
    }

    /// Registers a callback bound to `target` without keeping it alive.
    ///
    /// Once every strong reference to `target` is gone, the callback is
    /// dropped at the next notification.
    pub fn subscribe_weak<T, F>(&mut self, target: &Arc<T>, mut callback: F) -> SubscriptionId
    where
        T: Send + Sync + 'static,
        F: FnMut(&T, &NoteChange<'_>) + Send + 'static,
    {
        let target: Weak<T> = Arc::downgrade(target);
        self.register(boxed(move |change| match target.upgrade() {
            Some(target) => {
                callback(&target, change);
                Delivery::Keep
            }
            None => Delivery::Prune,
        }))
    }

    fn register(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Removes one callback. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Registered callbacks, including weak ones not yet pruned.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Invokes every callback with the same change event and drops weak
    /// subscribers whose target is gone. Returns how many were pruned.
    pub fn notify(&mut self, kind: &ChangeKind, notes: &[Note]) -> usize {
        let change = NoteChange { kind, notes };
        let before = self.subscribers.len();
        self.subscribers
            .retain_mut(|(_, callback)| callback(&change) == Delivery::Keep);
        before - self.subscribers.len()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
