use maybe_sync::{MaybeSend, MaybeSync};

use crate::attributes::{AttrValue, Attribute};

/// Outbound half of the host/renderer boundary.
///
/// Whenever a synchronized attribute changes, the widget reports the attribute and its new value
/// here. The implementation owns the transport (notebook comm channel, websocket, a test probe)
/// and the wire format; [`Attribute::name`] and the value's `Serialize` impl give the canonical
/// field name and JSON shape.
pub trait Messenger: MaybeSend + MaybeSync {
    /// Called after a synchronized attribute has been assigned a new value.
    fn attribute_updated(&self, attribute: Attribute, value: &AttrValue);
}

/// Messenger that drops all notifications. Useful for headless operation and tests.
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn attribute_updated(&self, _attribute: Attribute, _value: &AttrValue) {}
}
