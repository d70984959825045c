//! Observable values
//!
//! A [`Property`] holds a value plus the listeners that want to hear about
//! changes to it. Listeners run synchronously, in registration order, only
//! when the new value differs from the old one.

use std::fmt;

type Listener<T> = Box<dyn FnMut(&T, &T)>;

/// Token returned by [`Property::link`], used to unlink later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// A value with change notification and a remembered initial value
pub struct Property<T> {
    value: T,
    initial: T,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: usize,
}

impl<T: Clone + PartialEq> Property<T> {
    /// Create a property; `value` is also what [`reset`](Self::reset) restores
    pub fn new(value: T) -> Self {
        Self {
            initial: value.clone(),
            value,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Value the property was created with
    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// Set a new value, notifying listeners if it changed
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        let old = std::mem::replace(&mut self.value, value);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.value, &old);
        }
        true
    }

    /// Apply `f` to a copy of the current value and set the result
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// Restore the initial value
    pub fn reset(&mut self) -> bool {
        let initial = self.initial.clone();
        self.set(initial)
    }

    /// Register a listener called with `(new, old)` on every change
    pub fn link(&mut self, listener: impl FnMut(&T, &T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unlink(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.value)
            .field("initial", &self.initial)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
