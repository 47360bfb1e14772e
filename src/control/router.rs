use crate::attributes::Attributes;
use crate::control::{CallbackDispatcher, ErrorPolicy, InboundMessage};
use crate::error::ChoromapError;

/// Routes inbound renderer messages to the dispatcher matching their event kind.
///
/// The routing table is fixed: `"click"` goes to the ctrl-click dispatcher, `"hover"` to the
/// hover dispatcher, and every other event kind is silently ignored.
#[derive(Default)]
pub struct MessageRouter {
    ctrl_click_handlers: CallbackDispatcher,
    hover_handlers: CallbackDispatcher,
}

impl MessageRouter {
    /// Creates a router with empty dispatchers using the given error policy.
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            ctrl_click_handlers: CallbackDispatcher::new(policy),
            hover_handlers: CallbackDispatcher::new(policy),
        }
    }

    /// Dispatcher for `"click"` events.
    pub fn ctrl_click_handlers(&self) -> &CallbackDispatcher {
        &self.ctrl_click_handlers
    }

    /// Mutable dispatcher for `"click"` events.
    pub fn ctrl_click_handlers_mut(&mut self) -> &mut CallbackDispatcher {
        &mut self.ctrl_click_handlers
    }

    /// Dispatcher for `"hover"` events.
    pub fn hover_handlers(&self) -> &CallbackDispatcher {
        &self.hover_handlers
    }

    /// Mutable dispatcher for `"hover"` events.
    pub fn hover_handlers_mut(&mut self) -> &mut CallbackDispatcher {
        &mut self.hover_handlers
    }

    /// Sets the error policy of both dispatchers.
    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.ctrl_click_handlers.set_policy(policy);
        self.hover_handlers.set_policy(policy);
    }

    /// Forwards the message to the dispatcher matching its event kind.
    pub fn route(
        &self,
        message: &InboundMessage,
        attributes: &mut Attributes,
    ) -> Result<(), ChoromapError> {
        match message.event() {
            "click" => self.ctrl_click_handlers.dispatch(attributes, message.payload()),
            "hover" => self.hover_handlers.dispatch(attributes, message.payload()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::control::{CallbackRef, EventData};

    fn recording_router() -> (MessageRouter, Arc<Mutex<Vec<(&'static str, EventData)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));

        let make = |tag: &'static str, seen: Arc<Mutex<Vec<(&'static str, EventData)>>>| {
            let callback: CallbackRef = Arc::new(
                move |_attributes: &mut Attributes,
                      payload: &EventData|
                      -> Result<(), ChoromapError> {
                    seen.lock().push((tag, payload.clone()));
                    Ok(())
                },
            );
            callback
        };

        let mut router = MessageRouter::default();
        router
            .ctrl_click_handlers_mut()
            .register_callback(make("click", seen.clone()), false);
        router
            .hover_handlers_mut()
            .register_callback(make("hover", seen.clone()), false);

        (router, seen)
    }

    #[test]
    fn click_reaches_only_the_ctrl_click_dispatcher() {
        let (router, seen) = recording_router();
        let message = InboundMessage::from_json(json!({"event": "click", "id": "FRA"})).unwrap();

        let mut attributes = Attributes::default();
        router.route(&message, &mut attributes).unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "click");
        assert_eq!(seen[0].1.get("id"), Some(&json!("FRA")));
        assert!(!seen[0].1.contains_key("event"));
    }

    #[test]
    fn hover_reaches_only_the_hover_dispatcher() {
        let (router, seen) = recording_router();
        let message = InboundMessage::from_json(json!({"event": "hover", "id": "DEU"})).unwrap();

        let mut attributes = Attributes::default();
        router.route(&message, &mut attributes).unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "hover");
        assert_eq!(seen[0].1.get("id"), Some(&json!("DEU")));
    }

    #[test]
    fn unknown_event_reaches_no_dispatcher() {
        let (router, seen) = recording_router();
        let message = InboundMessage::from_json(json!({"event": "zoom"})).unwrap();

        let mut attributes = Attributes::default();
        router.route(&message, &mut attributes).unwrap();

        assert!(seen.lock().is_empty());
    }

    #[test]
    fn missing_event_reaches_no_dispatcher() {
        let (router, seen) = recording_router();
        let message = InboundMessage::from_json(json!({"id": "ESP"})).unwrap();

        let mut attributes = Attributes::default();
        router.route(&message, &mut attributes).unwrap();

        assert!(seen.lock().is_empty());
    }
}
