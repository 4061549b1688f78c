use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::control::FormControl;
use crate::error::BindingError;

/// Named form controls.
#[derive(Debug, Default)]
pub struct FormGroup {
    controls: BTreeMap<String, FormControl>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_control(&mut self, name: impl Into<String>, control: FormControl) -> Result<(), BindingError> {
        let name = name.into();
        if self.controls.contains_key(&name) {
            return Err(BindingError::DuplicateControl(name));
        }
        self.controls.insert(name, control);
        Ok(())
    }

    pub fn remove_control(&mut self, name: &str) -> Option<FormControl> {
        self.controls.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls.get_mut(name)
    }

    /// Set the value of a named control, notifying its listeners.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        let control = self
            .controls
            .get_mut(name)
            .ok_or_else(|| BindingError::UnknownControl(name.to_owned()))?;
        control.set_value(value);
        Ok(())
    }

    /// Snapshot of every control value, keyed by control name.
    pub fn value(&self) -> Value {
        let map: Map<String, Value> = self
            .controls
            .iter()
            .map(|(name, control)| (name.clone(), control.value().clone()))
            .collect();
        Value::Object(map)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
