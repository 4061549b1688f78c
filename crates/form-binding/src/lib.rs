//! Headless form binding over `serde_json` models.
//!
//! A [`ModelBinding`] registers a [`FormControl`] into a [`FormGroup`],
//! seeds it from a nested path of a shared model, and writes every later
//! change of the control back to that path using [`model_path`].

pub mod binding;
pub mod control;
pub mod error;
pub mod group;

pub use binding::{ModelBinding, SharedModel};
pub use control::{FormControl, ListenerId};
pub use error::BindingError;
pub use group::FormGroup;
