use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("control {0:?} is already registered")]
    DuplicateControl(String),
    #[error("no control named {0:?}")]
    UnknownControl(String),
}
