//! Style signal dispatch
//!
//! Each browsing context owns one [`SignalBus`]. Signals carry no payload and
//! never cross contexts. Emitting only queues the signal; the owning context
//! drains the queue from its event loop, which keeps delivery in FIFO order
//! and lets the context react to a signal after its listeners have seen it.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Broadcast notifications of the change propagation protocol
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StyleSignal {
    /// The editor saved the currently active theme or preset; refetch styles
    RefreshRequest,
    /// A channel replaced its stylesheet; components recompute their styles
    StyleApplied,
}

/// Handle returned by [`SignalBus::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ListenerId(u64);

/// Listener callback type
pub type SignalHandler = Box<dyn Fn(StyleSignal) + Send + Sync>;

/// Per-context broadcast bus
pub struct SignalBus {
    listeners: FxHashMap<StyleSignal, Vec<(ListenerId, SignalHandler)>>,
    pending: VecDeque<StyleSignal>,
    next_id: u64,
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            listeners: FxHashMap::default(),
            pending: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Register a listener for one signal kind
    pub fn subscribe<F>(&mut self, signal: StyleSignal, handler: F) -> ListenerId
    where
        F: Fn(StyleSignal) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(signal)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for handlers in self.listeners.values_mut() {
            let before = handlers.len();
            handlers.retain(|(listener, _)| *listener != id);
            removed |= handlers.len() != before;
        }
        removed
    }

    /// Queue a signal for delivery (fire-and-forget)
    pub fn emit(&mut self, signal: StyleSignal) {
        tracing::trace!("SignalBus::emit {:?}", signal);
        self.pending.push_back(signal);
    }

    /// Pop the oldest pending signal and deliver it to its listeners
    pub fn next(&mut self) -> Option<StyleSignal> {
        let signal = self.pending.pop_front()?;
        if let Some(handlers) = self.listeners.get(&signal) {
            for (_, handler) in handlers {
                handler(signal);
            }
        }
        Some(signal)
    }

    /// Number of signals waiting for delivery
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of listeners registered for a signal kind
    pub fn listener_count(&self, signal: StyleSignal) -> usize {
        self.listeners.get(&signal).map_or(0, Vec::len)
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}
