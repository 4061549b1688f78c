use std::collections::BTreeMap;

use serde_json::Value;

/// Identifier returned by [`FormControl::on_change`].
pub type ListenerId = u64;

type Listener = Box<dyn FnMut(&Value)>;

/// A single form input value with change listeners.
pub struct FormControl {
    value: Value,
    next_listener_id: ListenerId,
    listeners: BTreeMap<ListenerId, Listener>,
}

impl FormControl {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            next_listener_id: 1,
            listeners: BTreeMap::new(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the value and notify every listener, oldest first.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
        for listener in self.listeners.values_mut() {
            listener(&self.value);
        }
    }

    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Value) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.listeners.insert(id, Box::new(listener));
        id
    }

    pub fn off_change(&mut self, listener_id: ListenerId) -> bool {
        self.listeners.remove(&listener_id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for FormControl {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl std::fmt::Debug for FormControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
