// SPDX-License-Identifier: MPL-2.0
//! Change notifications emitted by the language selector.

use crate::domain::language::LanguageCode;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageEvent {
    /// The current language changed; carries the value at emission time.
    CurrentLanguageChanged(LanguageCode),

    /// Generic "re-translate everything" signal, sent once per accepted request.
    LanguageChanged,

    /// A change request was rejected before anything was attempted.
    LanguageLoadFailed {
        /// The input exactly as given.
        requested: String,
        /// Human-readable reason.
        reason: String,
    },
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber {
    Callback(Box<dyn FnMut(&LanguageEvent)>),
    Channel(Sender<LanguageEvent>),
}

/// Ordered subscription list. Delivery is synchronous on the emitting thread.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked for every event.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LanguageEvent) + 'static,
    {
        self.push(Subscriber::Callback(Box::new(callback)))
    }

    /// Registers a channel and returns its receiving end.
    ///
    /// The subscription is dropped automatically once the receiver is gone.
    pub fn channel(&mut self) -> Receiver<LanguageEvent> {
        let (sender, receiver) = mpsc::channel();
        self.push(Subscriber::Channel(sender));
        receiver
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Delivers `event` to every subscriber in registration order.
    pub fn emit(&mut self, event: &LanguageEvent) {
        self.subscribers.retain_mut(|(_, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(event);
                true
            }
            Subscriber::Channel(sender) => sender.send(event.clone()).is_ok(),
        });
    }

    fn push(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_receive_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut observers = Observers::new();
        observers.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        observers.emit(&LanguageEvent::LanguageChanged);
        observers.emit(&LanguageEvent::LanguageLoadFailed {
            requested: "de".into(),
            reason: "nope".into(),
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], LanguageEvent::LanguageChanged);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut observers = Observers::new();
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);

        observers.emit(&LanguageEvent::LanguageChanged);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.emit(&LanguageEvent::LanguageChanged);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn dropped_channel_is_pruned() {
        let mut observers = Observers::new();
        let receiver = observers.channel();
        observers.emit(&LanguageEvent::LanguageChanged);
        assert_eq!(receiver.try_recv(), Ok(LanguageEvent::LanguageChanged));

        drop(receiver);
        observers.emit(&LanguageEvent::LanguageChanged);
        assert!(observers.is_empty());
    }
}
