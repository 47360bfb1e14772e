use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::color::Color;

/// Semantic kind of an attribute value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttrKind {
    /// The null value. No attribute declares this kind; it is only ever reported by
    /// [`AttrValue::kind`] and accepted on nullable attributes.
    Null,
    /// Floating point number.
    Number,
    /// Text string.
    Text,
    /// Boolean flag.
    Bool,
    /// Ordered sequence of values.
    List,
    /// String-keyed mapping of values.
    Map,
    /// Color value, see [`Color`].
    Color,
    /// Pair of two strings.
    Pair,
    /// Reference to a collaborator widget model of the given kind.
    Ref(RefKind),
}

impl Display for AttrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttrKind::Null => "null",
            AttrKind::Number => "number",
            AttrKind::Text => "string",
            AttrKind::Bool => "boolean",
            AttrKind::List => "list",
            AttrKind::Map => "mapping",
            AttrKind::Color => "color",
            AttrKind::Pair => "pair",
            AttrKind::Ref(RefKind::ColorScale) => "color scale reference",
            AttrKind::Ref(RefKind::Axis) => "axis reference",
            AttrKind::Ref(RefKind::Widget) => "widget reference",
        };
        f.write_str(name)
    }
}

/// Kind of a collaborator model a [`WidgetRef`] points at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefKind {
    /// A color scale model mapping data values to colors.
    ColorScale,
    /// A display axis model.
    Axis,
    /// An opaque display widget, e.g. one rendered inside a tooltip.
    Widget,
}

/// Reference to a collaborator widget model living in the same host session.
///
/// The referenced model is owned elsewhere; the map widget only stores its id and mirrors it to
/// the renderer, which resolves the id against the host's model store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRef {
    kind: RefKind,
    model_id: String,
}

impl WidgetRef {
    /// Reference to a color scale model.
    pub fn color_scale(model_id: impl Into<String>) -> Self {
        Self {
            kind: RefKind::ColorScale,
            model_id: model_id.into(),
        }
    }

    /// Reference to a display axis model.
    pub fn axis(model_id: impl Into<String>) -> Self {
        Self {
            kind: RefKind::Axis,
            model_id: model_id.into(),
        }
    }

    /// Reference to an opaque display widget.
    pub fn widget(model_id: impl Into<String>) -> Self {
        Self {
            kind: RefKind::Widget,
            model_id: model_id.into(),
        }
    }

    /// Kind of the referenced model.
    pub fn kind(&self) -> RefKind {
        self.kind
    }

    /// Id of the referenced model.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Runtime value of a widget attribute.
///
/// Values inside [`AttrValue::List`] and [`AttrValue::Map`] are not typed beyond being attribute
/// values themselves; kind checking applies to the top level of an attribute only.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// The null value. Accepted only on nullable attributes.
    Null,
    /// Floating point number.
    Number(f64),
    /// Text string.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Ordered sequence of values.
    List(Vec<AttrValue>),
    /// String-keyed mapping of values.
    Map(HashMap<String, AttrValue>),
    /// Color value.
    Color(Color),
    /// Pair of two strings.
    Pair(String, String),
    /// Reference to a collaborator widget model.
    Ref(WidgetRef),
}

impl AttrValue {
    /// Semantic kind of this value.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Null => AttrKind::Null,
            AttrValue::Number(_) => AttrKind::Number,
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::List(_) => AttrKind::List,
            AttrValue::Map(_) => AttrKind::Map,
            AttrValue::Color(_) => AttrKind::Color,
            AttrValue::Pair(_, _) => AttrKind::Pair,
            AttrValue::Ref(reference) => AttrKind::Ref(reference.kind()),
        }
    }

    /// Returns true for [`AttrValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Null => serializer.serialize_none(),
            AttrValue::Number(value) => serializer.serialize_f64(*value),
            AttrValue::Text(value) => serializer.serialize_str(value),
            AttrValue::Bool(value) => serializer.serialize_bool(*value),
            AttrValue::List(values) => values.serialize(serializer),
            AttrValue::Map(values) => values.serialize(serializer),
            AttrValue::Color(color) => color.serialize(serializer),
            AttrValue::Pair(first, second) => (first, second).serialize(serializer),
            AttrValue::Ref(reference) => serializer.serialize_str(reference.model_id()),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Color> for AttrValue {
    fn from(value: Color) -> Self {
        AttrValue::Color(value)
    }
}

impl From<WidgetRef> for AttrValue {
    fn from(value: WidgetRef) -> Self {
        AttrValue::Ref(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        AttrValue::List(value)
    }
}

impl From<HashMap<String, AttrValue>> for AttrValue {
    fn from(value: HashMap<String, AttrValue>) -> Self {
        AttrValue::Map(value)
    }
}
