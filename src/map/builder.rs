use std::collections::HashMap;

use crate::attributes::{AttrValue, Attribute, Attributes, WidgetRef};
use crate::control::{ErrorPolicy, MessageRouter};
use crate::error::ChoromapError;
use crate::map::Map;
use crate::messenger::Messenger;
use crate::Color;

/// Convenience type to initialize a [Map].
///
/// Every attribute starts at its default; `with_*` methods override individual attributes
/// before the widget is created. [`MapBuilder::build`] kind-checks raw overrides exactly like
/// [`Attributes::set`] does, so a mistyped [`MapBuilder::with_attribute`] call fails there.
///
/// ```
/// use choromap::MapBuilder;
///
/// let map = MapBuilder::default()
///     .with_min_width(1024.0)
///     .with_min_height(768.0)
///     .with_selected(vec!["FRA".to_owned(), "DEU".to_owned()])
///     .build()
///     .expect("typed overrides always pass the kind check");
/// ```
#[derive(Default)]
pub struct MapBuilder {
    overrides: Vec<(Attribute, AttrValue)>,
    messenger: Option<Box<dyn Messenger>>,
    error_policy: ErrorPolicy,
}

impl MapBuilder {
    /// Overrides an attribute with a raw value.
    ///
    /// The value is kind-checked by [`MapBuilder::build`]; prefer the typed methods below where
    /// one exists.
    pub fn with_attribute(mut self, attribute: Attribute, value: impl Into<AttrValue>) -> Self {
        self.overrides.push((attribute, value.into()));
        self
    }

    /// Sets the minimum width of the entire map in pixels.
    pub fn with_min_width(self, min_width: f64) -> Self {
        self.with_attribute(Attribute::MinWidth, min_width)
    }

    /// Sets the minimum height of the entire map in pixels.
    pub fn with_min_height(self, min_height: f64) -> Self {
        self.with_attribute(Attribute::MinHeight, min_height)
    }

    /// Controls whether the map tracks the hovered subunit.
    pub fn with_enable_hover(self, enable_hover: bool) -> Self {
        self.with_attribute(Attribute::EnableHover, enable_hover)
    }

    /// Controls whether clicking a subunit toggles its selection.
    pub fn with_enable_select(self, enable_select: bool) -> Self {
        self.with_attribute(Attribute::EnableSelect, enable_select)
    }

    /// Controls whether tooltips are displayed.
    pub fn with_display_tooltip(self, display_tooltip: bool) -> Self {
        self.with_attribute(Attribute::DisplayTooltip, display_tooltip)
    }

    /// Sets the color data associated with the map subunits.
    pub fn with_color(self, color: HashMap<String, f64>) -> Self {
        let color = color
            .into_iter()
            .map(|(id, value)| (id, AttrValue::Number(value)))
            .collect::<HashMap<_, _>>();
        self.with_attribute(Attribute::Color, color)
    }

    /// Sets the color scale used to turn color data into fill colors.
    pub fn with_color_scale(self, color_scale: WidgetRef) -> Self {
        self.with_attribute(Attribute::ColorScale, color_scale)
    }

    /// Sets the color axis displayed next to the map.
    pub fn with_axis(self, axis: WidgetRef) -> Self {
        self.with_attribute(Attribute::Axis, axis)
    }

    /// Sets the ids of the initially selected subunits.
    pub fn with_selected(self, selected: Vec<String>) -> Self {
        let selected = selected.into_iter().map(AttrValue::Text).collect::<Vec<_>>();
        self.with_attribute(Attribute::Selected, selected)
    }

    /// Sets the stroke color of subunit outlines.
    pub fn with_stroke_color(self, stroke_color: Color) -> Self {
        self.with_attribute(Attribute::StrokeColor, stroke_color)
    }

    /// Sets the color used for subunits when no color data is passed.
    pub fn with_default_color(self, default_color: Color) -> Self {
        self.with_attribute(Attribute::DefaultColor, default_color)
    }

    /// Sets the background color of the tooltip.
    pub fn with_tooltip_color(self, tooltip_color: Color) -> Self {
        self.with_attribute(Attribute::TooltipColor, tooltip_color)
    }

    /// Sets the color of the text inside the tooltip.
    pub fn with_text_color(self, text_color: Color) -> Self {
        self.with_attribute(Attribute::TextColor, text_color)
    }

    /// Sets the text data shown in tooltips, keyed by subunit id.
    pub fn with_text_data(self, text_data: HashMap<String, AttrValue>) -> Self {
        self.with_attribute(Attribute::TextData, text_data)
    }

    /// Sets the number format for the text inside the tooltip.
    pub fn with_tooltip_format(self, tooltip_format: impl Into<String>) -> Self {
        self.with_attribute(Attribute::TooltipFormat, AttrValue::Text(tooltip_format.into()))
    }

    /// Sets the widget displayed inside the tooltip instead of text.
    pub fn with_tooltip_widget(self, tooltip_widget: WidgetRef) -> Self {
        self.with_attribute(Attribute::TooltipWidget, tooltip_widget)
    }

    /// Sets which map topology is displayed: the map name and the frontend resource that
    /// contains it.
    pub fn with_map_data(self, name: impl Into<String>, resource: impl Into<String>) -> Self {
        self.with_attribute(
            Attribute::MapData,
            AttrValue::Pair(name.into(), resource.into()),
        )
    }

    /// Sets a [messenger](Messenger) implementation for the widget.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Sets the error policy of the widget's event dispatchers.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Consumes the builder and creates a map instance.
    ///
    /// Overrides are applied in the order they were given, before the messenger is attached:
    /// construction emits no update notifications, since the initial full state is delivered by
    /// the host handshake.
    pub fn build(self) -> Result<Map, ChoromapError> {
        let MapBuilder {
            overrides,
            messenger,
            error_policy,
        } = self;

        let mut attributes = Attributes::new(None);
        for (attribute, value) in overrides {
            attributes.set(attribute, value)?;
        }
        attributes.set_boxed_messenger(messenger);

        Ok(Map::from_parts(attributes, MessageRouter::new(error_policy)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use parking_lot::Mutex;

    use super::*;
    use crate::attributes::AttrKind;

    #[derive(Clone, Default)]
    struct RecordingMessenger {
        updates: Arc<Mutex<Vec<(Attribute, AttrValue)>>>,
    }

    impl Messenger for RecordingMessenger {
        fn attribute_updated(&self, attribute: Attribute, value: &AttrValue) {
            self.updates.lock().push((attribute, value.clone()));
        }
    }

    #[test]
    fn builds_map_with_default_attributes() {
        let map = MapBuilder::default().build().unwrap();

        for attribute in Attribute::ALL {
            assert_eq!(*map.get(attribute), attribute.default_value());
        }
    }

    #[test]
    fn typed_overrides_are_applied() {
        let map = MapBuilder::default()
            .with_min_width(1024.0)
            .with_enable_hover(false)
            .with_tooltip_format(".0f")
            .with_color_scale(WidgetRef::color_scale("scale-0"))
            .with_map_data("usmap", "nbextensions/bqplot/USStatesMap")
            .build()
            .unwrap();

        assert_eq!(*map.get(Attribute::MinWidth), AttrValue::Number(1024.0));
        assert_eq!(*map.get(Attribute::EnableHover), AttrValue::Bool(false));
        assert_eq!(
            *map.get(Attribute::TooltipFormat),
            AttrValue::Text(".0f".to_owned())
        );
        assert_eq!(
            *map.get(Attribute::ColorScale),
            AttrValue::Ref(WidgetRef::color_scale("scale-0"))
        );
        assert_eq!(
            *map.get(Attribute::MapData),
            AttrValue::Pair(
                "usmap".to_owned(),
                "nbextensions/bqplot/USStatesMap".to_owned()
            )
        );
    }

    #[test]
    fn later_override_wins() {
        let map = MapBuilder::default()
            .with_min_width(900.0)
            .with_min_width(1000.0)
            .build()
            .unwrap();

        assert_eq!(*map.get(Attribute::MinWidth), AttrValue::Number(1000.0));
    }

    #[test]
    fn mistyped_raw_override_fails_the_build() {
        let result = MapBuilder::default()
            .with_attribute(Attribute::MinWidth, "wide")
            .build();

        assert_matches!(
            result,
            Err(ChoromapError::InvalidAttributeKind {
                attribute: Attribute::MinWidth,
                expected: AttrKind::Number,
                actual: AttrKind::Text,
            })
        );
    }

    #[test]
    fn construction_emits_no_notifications() {
        let messenger = RecordingMessenger::default();
        let updates = messenger.updates.clone();

        let mut map = MapBuilder::default()
            .with_min_width(1024.0)
            .with_messenger(messenger)
            .build()
            .unwrap();
        assert!(updates.lock().is_empty());

        map.set(Attribute::MinWidth, 800.0).unwrap();
        assert_eq!(
            *updates.lock(),
            vec![(Attribute::MinWidth, AttrValue::Number(800.0))]
        );
    }

    #[test]
    fn error_policy_is_wired_into_dispatchers() {
        use crate::control::{EventData, InboundMessage};

        let mut map = MapBuilder::default()
            .with_error_policy(ErrorPolicy::Isolate)
            .build()
            .unwrap();

        map.on_hover(
            Arc::new(
                |_attributes: &mut Attributes, _payload: &EventData| -> Result<(), ChoromapError> {
                    Err(ChoromapError::Callback("first".to_owned()))
                },
            ),
            false,
        );
        map.on_hover(
            Arc::new(
                |_attributes: &mut Attributes, _payload: &EventData| -> Result<(), ChoromapError> {
                    Err(ChoromapError::Callback("second".to_owned()))
                },
            ),
            false,
        );

        let message =
            InboundMessage::from_json(serde_json::json!({"event": "hover", "id": "ESP"}))
                .unwrap();
        let result = map.process_message(&message);

        assert_matches!(
            result,
            Err(ChoromapError::CallbacksFailed(errors)) if errors.len() == 2
        );
    }
}
