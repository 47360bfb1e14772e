//! Error types used by the crate.

use thiserror::Error;

use crate::attributes::{AttrKind, Attribute};

/// Choromap error type.
#[derive(Debug, Error)]
pub enum ChoromapError {
    /// A value of the wrong kind was assigned to an attribute.
    #[error("invalid value kind for attribute {attribute}: expected {expected}, found {actual}")]
    InvalidAttributeKind {
        /// Attribute the assignment targeted.
        attribute: Attribute,
        /// Kind the attribute declares.
        expected: AttrKind,
        /// Kind of the rejected value.
        actual: AttrKind,
    },
    /// An attribute name that is not part of the widget model.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
    /// A host callback reported a failure.
    #[error("{0}")]
    Callback(String),
    /// One or more callbacks failed while an event was dispatched.
    #[error("{} callback(s) failed during dispatch", .0.len())]
    CallbacksFailed(Vec<ChoromapError>),
    /// An inbound message could not be decoded.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),
}
