//! Synchronized widget configuration: the attribute table and its store.
//!
//! Every attribute listed in [`Attribute`] is mirrored to the browser-side renderer: each
//! successful [`Attributes::set`] call notifies the attached [`Messenger`] with the attribute
//! and its new value. The store performs kind checking on writes and nothing else; range or
//! consistency validation is the renderer's problem.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ChoromapError;
use crate::messenger::Messenger;
use crate::Color;

mod value;

pub use value::{AttrKind, AttrValue, RefKind, WidgetRef};

/// A configuration field of the map widget.
///
/// All attributes are synchronized with the renderer. [`Attribute::name`] gives the wire name
/// used on the sync channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Margin of the map plot area with respect to the entire display area. A mapping with
    /// `top`, `bottom`, `left` and `right` entries in pixels.
    FigMargin,
    /// Minimum width of the entire map in pixels.
    MinWidth,
    /// Minimum height of the entire map in pixels.
    MinHeight,
    /// Whether the map tracks which subunit is being hovered on. When false, tooltips are not
    /// displayed either.
    EnableHover,
    /// Styles applied to the hovered subunit.
    HoveredStyles,
    /// Stroke color of subunit outlines.
    StrokeColor,
    /// Color used for subunits when no color data is passed.
    DefaultColor,
    /// Data associated with every subunit, fed to the color scale.
    Color,
    /// Color scale used to turn [`Attribute::Color`] data into fill colors. Required when color
    /// data is passed.
    ColorScale,
    /// Whether clicking a subunit toggles its selection.
    EnableSelect,
    /// Ids of the currently selected subunits.
    Selected,
    /// Styles applied to selected subunits.
    SelectedStyles,
    /// Color axis displayed next to the map.
    Axis,
    /// Background color of the tooltip.
    TooltipColor,
    /// Whether tooltips are displayed at all.
    DisplayTooltip,
    /// Text associated with every subunit, shown inside the tooltip.
    TextData,
    /// Color of the text inside the tooltip.
    TextColor,
    /// Number format for the text inside the tooltip.
    TooltipFormat,
    /// Widget displayed inside the tooltip instead of text.
    TooltipWidget,
    /// Which map topology is displayed: a pair of the map name and the frontend resource that
    /// contains it.
    MapData,
}

impl Attribute {
    /// Number of attributes in the widget model.
    pub const COUNT: usize = Self::ALL.len();

    /// All attributes, in declaration order.
    pub const ALL: [Attribute; 20] = [
        Attribute::FigMargin,
        Attribute::MinWidth,
        Attribute::MinHeight,
        Attribute::EnableHover,
        Attribute::HoveredStyles,
        Attribute::StrokeColor,
        Attribute::DefaultColor,
        Attribute::Color,
        Attribute::ColorScale,
        Attribute::EnableSelect,
        Attribute::Selected,
        Attribute::SelectedStyles,
        Attribute::Axis,
        Attribute::TooltipColor,
        Attribute::DisplayTooltip,
        Attribute::TextData,
        Attribute::TextColor,
        Attribute::TooltipFormat,
        Attribute::TooltipWidget,
        Attribute::MapData,
    ];

    /// Name of the attribute on the sync channel.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::FigMargin => "fig_margin",
            Attribute::MinWidth => "min_width",
            Attribute::MinHeight => "min_height",
            Attribute::EnableHover => "enable_hover",
            Attribute::HoveredStyles => "hovered_styles",
            Attribute::StrokeColor => "stroke_color",
            Attribute::DefaultColor => "default_color",
            Attribute::Color => "color",
            Attribute::ColorScale => "color_scale",
            Attribute::EnableSelect => "enable_select",
            Attribute::Selected => "selected",
            Attribute::SelectedStyles => "selected_styles",
            Attribute::Axis => "axis",
            Attribute::TooltipColor => "tooltip_color",
            Attribute::DisplayTooltip => "display_tooltip",
            Attribute::TextData => "text_data",
            Attribute::TextColor => "text_color",
            Attribute::TooltipFormat => "tooltip_format",
            Attribute::TooltipWidget => "tooltip_widget",
            Attribute::MapData => "map_data",
        }
    }

    /// Kind a value assigned to this attribute must have.
    pub fn kind(&self) -> AttrKind {
        match self {
            Attribute::FigMargin
            | Attribute::HoveredStyles
            | Attribute::Color
            | Attribute::SelectedStyles
            | Attribute::TextData => AttrKind::Map,
            Attribute::MinWidth | Attribute::MinHeight => AttrKind::Number,
            Attribute::EnableHover | Attribute::EnableSelect | Attribute::DisplayTooltip => {
                AttrKind::Bool
            }
            Attribute::StrokeColor
            | Attribute::DefaultColor
            | Attribute::TooltipColor
            | Attribute::TextColor => AttrKind::Color,
            Attribute::ColorScale => AttrKind::Ref(RefKind::ColorScale),
            Attribute::Selected => AttrKind::List,
            Attribute::Axis => AttrKind::Ref(RefKind::Axis),
            Attribute::TooltipFormat => AttrKind::Text,
            Attribute::TooltipWidget => AttrKind::Ref(RefKind::Widget),
            Attribute::MapData => AttrKind::Pair,
        }
    }

    /// Whether [`AttrValue::Null`] is a valid value for this attribute.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            Attribute::HoveredStyles
                | Attribute::StrokeColor
                | Attribute::DefaultColor
                | Attribute::ColorScale
                | Attribute::SelectedStyles
                | Attribute::Axis
                | Attribute::TooltipWidget
        )
    }

    /// Value the attribute holds in a freshly constructed widget.
    pub fn default_value(&self) -> AttrValue {
        match self {
            Attribute::FigMargin => AttrValue::Map(HashMap::from([
                ("top".to_owned(), AttrValue::Number(0.0)),
                ("bottom".to_owned(), AttrValue::Number(20.0)),
                ("left".to_owned(), AttrValue::Number(0.0)),
                ("right".to_owned(), AttrValue::Number(0.0)),
            ])),
            Attribute::MinWidth => AttrValue::Number(800.0),
            Attribute::MinHeight => AttrValue::Number(600.0),
            Attribute::EnableHover => AttrValue::Bool(true),
            Attribute::HoveredStyles => AttrValue::Map(HashMap::from([
                ("hovered_fill".to_owned(), AttrValue::Text("Orange".to_owned())),
                ("hovered_stroke".to_owned(), AttrValue::Null),
                ("hovered_stroke_width".to_owned(), AttrValue::Number(5.0)),
            ])),
            Attribute::StrokeColor => AttrValue::Null,
            Attribute::DefaultColor => AttrValue::Null,
            Attribute::Color => AttrValue::Map(HashMap::new()),
            Attribute::ColorScale => AttrValue::Null,
            Attribute::EnableSelect => AttrValue::Bool(true),
            Attribute::Selected => AttrValue::List(Vec::new()),
            Attribute::SelectedStyles => AttrValue::Map(HashMap::from([
                ("selected_fill".to_owned(), AttrValue::Text("Red".to_owned())),
                ("selected_stroke".to_owned(), AttrValue::Null),
                ("selected_stroke_width".to_owned(), AttrValue::Number(5.0)),
            ])),
            Attribute::Axis => AttrValue::Null,
            Attribute::TooltipColor => AttrValue::Color(Color::WHITE),
            Attribute::DisplayTooltip => AttrValue::Bool(true),
            Attribute::TextData => AttrValue::Map(HashMap::new()),
            Attribute::TextColor => AttrValue::Color(Color::BLACK),
            Attribute::TooltipFormat => AttrValue::Text(".2f".to_owned()),
            Attribute::TooltipWidget => AttrValue::Null,
            Attribute::MapData => AttrValue::Pair(
                "worldmap".to_owned(),
                "nbextensions/bqplot/WorldMapData".to_owned(),
            ),
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ChoromapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| ChoromapError::UnknownAttribute(s.to_owned()))
    }
}

/// Store of the widget's synchronized attributes.
///
/// A store always holds a value for every [`Attribute`]; construction fills in the defaults.
/// Writes are kind-checked and independent of each other, and each successful write is reported
/// to the attached [`Messenger`].
pub struct Attributes {
    values: [AttrValue; Attribute::COUNT],
    messenger: Option<Box<dyn Messenger>>,
}

impl Attributes {
    /// Creates a store with every attribute at its default.
    pub fn new(messenger: Option<Box<dyn Messenger>>) -> Self {
        Self {
            values: Attribute::ALL.map(|attribute| attribute.default_value()),
            messenger,
        }
    }

    /// Current value of the attribute.
    pub fn get(&self, attribute: Attribute) -> &AttrValue {
        &self.values[attribute as usize]
    }

    /// Assigns a new value to the attribute and notifies the messenger.
    ///
    /// Fails with [`ChoromapError::InvalidAttributeKind`] when the value's kind disagrees with
    /// the attribute's declared kind; null is accepted on nullable attributes. A rejected write
    /// leaves the stored value untouched and sends no notification.
    pub fn set(
        &mut self,
        attribute: Attribute,
        value: impl Into<AttrValue>,
    ) -> Result<(), ChoromapError> {
        let value = value.into();
        let actual = value.kind();
        if actual != attribute.kind() && !(value.is_null() && attribute.is_nullable()) {
            return Err(ChoromapError::InvalidAttributeKind {
                attribute,
                expected: attribute.kind(),
                actual,
            });
        }

        let slot = &mut self.values[attribute as usize];
        *slot = value;
        if let Some(messenger) = &self.messenger {
            messenger.attribute_updated(attribute, slot);
        }

        Ok(())
    }

    /// Iterates over all attributes and their current values, in declaration order.
    ///
    /// This is the full-state snapshot a transport sends on the initial handshake.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttrValue)> + '_ {
        Attribute::ALL
            .iter()
            .map(|&attribute| (attribute, &self.values[attribute as usize]))
    }

    /// Sets the messenger attribute changes are reported to.
    pub fn set_messenger(&mut self, messenger: Option<impl Messenger + 'static>) {
        self.set_boxed_messenger(messenger.map(|m| Box::new(m) as Box<dyn Messenger>));
    }

    pub(crate) fn set_boxed_messenger(&mut self, messenger: Option<Box<dyn Messenger>>) {
        self.messenger = messenger;
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new(None)
    }
}
