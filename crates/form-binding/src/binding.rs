use std::cell::RefCell;
use std::rc::Rc;

use model_path::PathAccessor;
use serde_json::Value;

use crate::control::{FormControl, ListenerId};
use crate::error::BindingError;
use crate::group::FormGroup;

/// A model shared between its owner and the bindings writing into it.
pub type SharedModel = Rc<RefCell<Value>>;

/// Link between a control in a [`FormGroup`] and a path in a model.
///
/// Binding registers a new control seeded from the model. From then on every
/// change of the control is written back to the model at the same path.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use form_binding::{FormGroup, ModelBinding};
/// use model_path::PathAccessor;
/// use serde_json::json;
///
/// let model = Rc::new(RefCell::new(json!({"user": {"name": "Ada"}})));
/// let mut group = FormGroup::new();
///
/// let binding = ModelBinding::bind(&mut group, "name", "user.name", &model, PathAccessor::new()).unwrap();
/// assert_eq!(group.get("name").unwrap().value(), &json!("Ada"));
///
/// group.set_value("name", json!("Grace")).unwrap();
/// assert_eq!(*model.borrow(), json!({"user": {"name": "Grace"}}));
///
/// binding.unbind(&mut group).unwrap();
/// ```
#[derive(Debug)]
pub struct ModelBinding {
    name: String,
    path: String,
    listener: ListenerId,
}

impl ModelBinding {
    /// Register control `name` in `group`, bound to `path` in `model`.
    ///
    /// # Errors
    ///
    /// - `BindingError::DuplicateControl` - if `group` already has `name`
    pub fn bind(
        group: &mut FormGroup,
        name: impl Into<String>,
        path: impl Into<String>,
        model: &SharedModel,
        accessor: PathAccessor,
    ) -> Result<Self, BindingError> {
        let name = name.into();
        let path = path.into();
        if group.contains(&name) {
            return Err(BindingError::DuplicateControl(name));
        }

        let initial = accessor
            .get_value(Some(path.as_str()), &model.borrow())
            .cloned()
            .unwrap_or(Value::Null);
        let mut control = FormControl::new(initial);

        let target = Rc::clone(model);
        let write_path = path.clone();
        let listener = control.on_change(move |value| match target.try_borrow_mut() {
            Ok(mut model) => accessor.set_value(&write_path, value.clone(), &mut model),
            Err(_) => tracing::warn!(path = %write_path, "model is borrowed; write skipped"),
        });

        group.add_control(name.clone(), control)?;
        tracing::debug!(control = %name, path = %path, "bound control to model path");
        Ok(Self { name, path, listener })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Stop writing to the model and remove the control from `group`.
    ///
    /// # Errors
    ///
    /// - `BindingError::UnknownControl` - if the control was already removed
    pub fn unbind(self, group: &mut FormGroup) -> Result<FormControl, BindingError> {
        let mut control = group
            .remove_control(&self.name)
            .ok_or_else(|| BindingError::UnknownControl(self.name.clone()))?;
        control.off_change(self.listener);
        tracing::debug!(control = %self.name, path = %self.path, "unbound control");
        Ok(control)
    }
}
