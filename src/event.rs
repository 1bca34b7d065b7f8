//! Named event listeners attached to a target by composition.
//!
//! An [`EventEmitter`] maps an event name to the ordered list of listeners
//! subscribed to it. Emitting an event calls every listener for that name, in
//! registration order, with a mutable borrow of the target and the event payload.
//!
//! A listener that returns an error is logged and skipped over: the remaining
//! listeners of the same dispatch still run.

use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Callback invoked with the event target and the event payload.
pub type Listener<T, E> = Box<dyn FnMut(&mut T, &E) -> anyhow::Result<()>>;

/// Outcome of a single [`EventEmitter::emit`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Number of listeners that were called
    pub invoked: usize,
    /// Number of listeners that returned an error
    pub failed: usize,
}

impl DispatchReport {
    /// True when at least one listener handled the event.
    pub fn handled(&self) -> bool {
        self.invoked > 0
    }
}

/// Registry of named listeners for a target of type `T` receiving payloads `E`.
pub struct EventEmitter<T: ?Sized, E> {
    listeners: HashMap<String, Vec<Listener<T, E>>>,
}

impl<T: ?Sized, E> Default for EventEmitter<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> fmt::Debug for EventEmitter<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, listeners) in &self.listeners {
            map.entry(name, &listeners.len());
        }
        map.finish()
    }
}

impl<T: ?Sized, E> EventEmitter<T, E> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Appends `listener` to the list for `name`, creating the list on first use.
    pub fn on<F>(&mut self, name: impl Into<String>, listener: F)
    where
        F: FnMut(&mut T, &E) -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        let list = self.listeners.entry(name).or_default();
        list.push(Box::new(listener));
    }

    /// Calls every listener registered for `name` in registration order.
    ///
    /// Emitting a name nobody listens to is a no-op and reports zero invocations.
    pub fn emit(&mut self, name: &str, target: &mut T, event: &E) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(listeners) = self.listeners.get_mut(name) else {
            debug!("No listeners for '{name}'");
            return report;
        };

        for (index, listener) in listeners.iter_mut().enumerate() {
            report.invoked += 1;
            if let Err(err) = listener(&mut *target, event) {
                report.failed += 1;
                warn!("Listener #{index} for '{name}' failed: {err:#}");
            }
        }

        report
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }
}
