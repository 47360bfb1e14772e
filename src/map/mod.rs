use crate::attributes::{AttrValue, Attribute, Attributes};
use crate::control::{CallbackRef, ErrorPolicy, InboundMessage, MessageRouter};
use crate::error::ChoromapError;
use crate::messenger::Messenger;

mod builder;

pub use builder::MapBuilder;

/// An interactive choropleth world map widget.
///
/// A `Map` owns the synchronized [`Attributes`] of one map instance and the event wiring that
/// connects renderer messages to host callbacks. The renderer itself lives on the other side of
/// the host transport: it receives attribute updates through the [`Messenger`] and reports user
/// interaction back as [`InboundMessage`]s.
pub struct Map {
    attributes: Attributes,
    router: MessageRouter,
}

impl Map {
    pub(crate) fn from_parts(attributes: Attributes, router: MessageRouter) -> Self {
        Self { attributes, router }
    }

    /// Creates a builder for configuring a map.
    pub fn builder() -> MapBuilder {
        MapBuilder::default()
    }

    /// The widget's attribute store.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the widget's attribute store.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Current value of the attribute.
    pub fn get(&self, attribute: Attribute) -> &AttrValue {
        self.attributes.get(attribute)
    }

    /// Assigns a new value to the attribute, mirroring it to the renderer.
    pub fn set(
        &mut self,
        attribute: Attribute,
        value: impl Into<AttrValue>,
    ) -> Result<(), ChoromapError> {
        self.attributes.set(attribute, value)
    }

    /// Registers a callback for ctrl-click events on map subunits, or removes it when `remove`
    /// is true.
    pub fn on_ctrl_click(&mut self, callback: CallbackRef, remove: bool) {
        self.router
            .ctrl_click_handlers_mut()
            .register_callback(callback, remove);
    }

    /// Registers a callback for hover events on map subunits, or removes it when `remove` is
    /// true.
    pub fn on_hover(&mut self, callback: CallbackRef, remove: bool) {
        self.router
            .hover_handlers_mut()
            .register_callback(callback, remove);
    }

    /// Feeds an inbound renderer message to the widget.
    ///
    /// Messages with an unrecognized event kind are silently ignored. Callback failures surface
    /// according to the configured [`ErrorPolicy`].
    pub fn process_message(&mut self, message: &InboundMessage) -> Result<(), ChoromapError> {
        self.router.route(message, &mut self.attributes)
    }

    /// Sets the messenger attribute changes are reported to.
    pub fn set_messenger(&mut self, messenger: Option<impl Messenger + 'static>) {
        self.attributes.set_messenger(messenger);
    }

    /// Sets the error policy of both event dispatchers.
    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.router.set_error_policy(policy);
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::from_parts(Attributes::default(), MessageRouter::default())
    }
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::control::EventData;

    #[test]
    fn hover_scenario() {
        let mut map = Map::default();

        let invocations = Arc::new(Mutex::new(Vec::new()));
        let seen = invocations.clone();
        map.on_hover(
            Arc::new(
                move |_attributes: &mut Attributes,
                      payload: &EventData|
                      -> Result<(), ChoromapError> {
                    seen.lock().push(payload.clone());
                    Ok(())
                },
            ),
            false,
        );

        let message = InboundMessage::from_json(json!({"event": "hover", "id": "ESP"})).unwrap();
        map.process_message(&message).unwrap();

        let invocations = invocations.lock();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].get("id"), Some(&json!("ESP")));
    }

    #[test]
    fn click_callback_sees_and_mutates_widget_state() {
        let mut map = Map::default();

        map.on_ctrl_click(
            Arc::new(|attributes: &mut Attributes, payload: &EventData| {
                let id = payload
                    .get("id")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| ChoromapError::Callback("click without id".to_owned()))?;
                attributes.set(Attribute::Selected, vec![AttrValue::from(id)])
            }),
            false,
        );

        let message = InboundMessage::from_json(json!({"event": "click", "id": "FRA"})).unwrap();
        map.process_message(&message).unwrap();

        assert_eq!(
            *map.get(Attribute::Selected),
            AttrValue::List(vec![AttrValue::Text("FRA".to_owned())])
        );
    }

    #[test]
    fn removed_callback_is_not_invoked() {
        let mut map = Map::default();

        let invocations = Arc::new(Mutex::new(Vec::new()));
        let seen = invocations.clone();
        let callback: CallbackRef = Arc::new(
            move |_attributes: &mut Attributes,
                  payload: &EventData|
                  -> Result<(), ChoromapError> {
                seen.lock().push(payload.clone());
                Ok(())
            },
        );

        map.on_hover(callback.clone(), false);
        map.on_hover(callback, true);

        let message = InboundMessage::from_json(json!({"event": "hover", "id": "ESP"})).unwrap();
        map.process_message(&message).unwrap();

        assert!(invocations.lock().is_empty());
    }

    #[test]
    fn unknown_event_is_ignored() {
        let mut map = Map::default();
        let message = InboundMessage::from_json(json!({"event": "zoom"})).unwrap();

        assert!(map.process_message(&message).is_ok());
    }
}
