// SPDX-License-Identifier: MIT OR Apache-2.0
//! Listener registration and event fan-out.

use crate::sequence::FrameSequence;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub Uuid);

impl ListenerId {
    /// Create a new random listener ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives playback events from an animator.
///
/// Both callbacks default to doing nothing, so an implementor only overrides
/// the events it cares about. Callbacks run synchronously inside the call
/// that caused them.
pub trait SequenceListener<F>: Send {
    /// The displayed frame changed to `index`
    fn on_frame_changed(&mut self, _sequence: &FrameSequence<F>, _index: usize) {}

    /// Playback tried to advance past the last frame
    fn on_complete(&mut self, _sequence: &FrameSequence<F>) {}
}

/// Callback type for frame-changed notifications
pub type FrameChangedCallback<F> = Box<dyn FnMut(&FrameSequence<F>, usize) + Send>;

/// Callback type for completion notifications
pub type CompleteCallback<F> = Box<dyn FnMut(&FrameSequence<F>) + Send>;

/// Listener built from a pair of closures
pub struct CallbackListener<F> {
    on_frame_changed: Option<FrameChangedCallback<F>>,
    on_complete: Option<CompleteCallback<F>>,
}

impl<F> CallbackListener<F> {
    /// Create a listener from optional callbacks
    pub fn new(
        on_frame_changed: Option<FrameChangedCallback<F>>,
        on_complete: Option<CompleteCallback<F>>,
    ) -> Self {
        Self {
            on_frame_changed,
            on_complete,
        }
    }
}

impl<F> SequenceListener<F> for CallbackListener<F> {
    fn on_frame_changed(&mut self, sequence: &FrameSequence<F>, index: usize) {
        if let Some(callback) = self.on_frame_changed.as_mut() {
            callback(sequence, index);
        }
    }

    fn on_complete(&mut self, sequence: &FrameSequence<F>) {
        if let Some(callback) = self.on_complete.as_mut() {
            callback(sequence);
        }
    }
}

/// Registered listeners, notified in registration order
pub struct ListenerRegistry<F> {
    listeners: IndexMap<ListenerId, Box<dyn SequenceListener<F>>>,
}

impl<F> ListenerRegistry<F> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            listeners: IndexMap::new(),
        }
    }

    /// Add a listener
    pub fn register(&mut self, listener: Box<dyn SequenceListener<F>>) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.insert(id, listener);
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Check if a listener is registered
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Get listener count
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub(crate) fn notify_frame_changed(&mut self, sequence: &FrameSequence<F>, index: usize) {
        for listener in self.listeners.values_mut() {
            listener.on_frame_changed(sequence, index);
        }
    }

    pub(crate) fn notify_complete(&mut self, sequence: &FrameSequence<F>) {
        for listener in self.listeners.values_mut() {
            listener.on_complete(sequence);
        }
    }
}

impl<F> Default for ListenerRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for ListenerRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl SequenceListener<u32> for Tagged {
        fn on_frame_changed(&mut self, _sequence: &FrameSequence<u32>, index: usize) {
            self.log.lock().push(format!("{}:frame:{index}", self.tag));
        }
    }

    #[test]
    fn test_dispatch_follows_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sequence = FrameSequence::new([7_u32, 8]);
        let mut registry = ListenerRegistry::new();
        for tag in ["a", "b", "c"] {
            registry.register(Box::new(Tagged {
                tag,
                log: log.clone(),
            }));
        }

        registry.notify_frame_changed(&sequence, 1);
        // Completion is a no-op for Tagged
        registry.notify_complete(&sequence);

        assert_eq!(*log.lock(), ["a:frame:1", "b:frame:1", "c:frame:1"]);
    }

    #[test]
    fn test_unregister_stops_delivery() {
        let hits = Arc::new(Mutex::new(0));
        let counter = hits.clone();
        let sequence = FrameSequence::new([1_u32]);
        let mut registry = ListenerRegistry::new();
        let id = registry.register(Box::new(CallbackListener::new(
            None,
            Some(Box::new(move |_: &FrameSequence<u32>| *counter.lock() += 1)),
        )));

        registry.notify_complete(&sequence);
        assert!(registry.contains(id));
        assert!(registry.unregister(id));
        assert!(!registry.contains(id));
        assert!(!registry.unregister(id));
        registry.notify_complete(&sequence);

        assert_eq!(*hits.lock(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_drops_every_listener() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sequence = FrameSequence::new([3_u32, 4]);
        let mut registry = ListenerRegistry::new();
        let ids: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|tag| {
                registry.register(Box::new(Tagged {
                    tag,
                    log: log.clone(),
                }))
            })
            .collect();
        assert_eq!(registry.len(), 2);

        registry.clear();
        registry.notify_frame_changed(&sequence, 1);

        assert!(registry.is_empty());
        assert!(ids.iter().all(|id| !registry.contains(*id)));
        assert!(log.lock().is_empty());
    }
}
