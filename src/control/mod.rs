//! This module contains the types that make a choromap widget interactive.
//!
//! Event handling is done in several steps:
//! 1. The renderer emits a JSON message over the host transport. The transport decodes it into
//!    an [`InboundMessage`], which carries the event kind and the remaining payload fields.
//! 2. The message is given to the [`MessageRouter`], which forwards it to the
//!    [`CallbackDispatcher`] matching the event kind. `"click"` and `"hover"` are the only
//!    recognized kinds; anything else is dropped on the floor.
//! 3. The dispatcher invokes the registered [`EventCallback`]s in registration order, giving
//!    each one mutable access to the widget's [`Attributes`].
//!
//! To react to map events, host code registers callbacks through
//! [`Map::on_ctrl_click`](crate::Map::on_ctrl_click) and [`Map::on_hover`](crate::Map::on_hover).

use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};
use serde::Deserialize;

use crate::attributes::Attributes;
use crate::error::ChoromapError;

mod dispatcher;
mod router;

pub use dispatcher::{CallbackDispatcher, ErrorPolicy};
pub use router::MessageRouter;

/// Payload of an inbound event, forwarded to callbacks unchanged.
pub type EventData = serde_json::Map<String, serde_json::Value>;

/// Host-side callback invoked when a renderer event is dispatched.
pub trait EventCallback: MaybeSend + MaybeSync {
    /// Handle the event.
    fn call(&self, attributes: &mut Attributes, payload: &EventData)
        -> Result<(), ChoromapError>;
}

impl<T> EventCallback for T
where
    T: Fn(&mut Attributes, &EventData) -> Result<(), ChoromapError> + MaybeSend + MaybeSync,
{
    fn call(
        &self,
        attributes: &mut Attributes,
        payload: &EventData,
    ) -> Result<(), ChoromapError> {
        self(attributes, payload)
    }
}

/// Shared handle to a registered callback.
///
/// The handle's identity is the `Arc` allocation: registering the same handle twice dispatches
/// it twice, and removal succeeds only for a clone of the handle that was registered.
pub type CallbackRef = Arc<dyn EventCallback>;

/// An event notification delivered from the renderer to the widget.
///
/// The wire shape is `{"event": <kind>, ...payload}`. A missing `event` key reads as the empty
/// string, which no dispatcher matches.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    #[serde(default)]
    event: String,
    #[serde(flatten)]
    payload: EventData,
}

impl InboundMessage {
    /// Creates a message from its parts.
    pub fn new(event: impl Into<String>, payload: EventData) -> Self {
        Self {
            event: event.into(),
            payload,
        }
    }

    /// Decodes a message from the renderer's JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ChoromapError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Kind of the event, e.g. `"click"` or `"hover"`.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Payload fields of the message, without the `event` key.
    pub fn payload(&self) -> &EventData {
        &self.payload
    }
}
