//! Choromap is the host-side model of a notebook-embedded widget that renders an interactive
//! choropleth world map. The crate keeps the widget's declarative display state and its event
//! wiring; the actual drawing (map topology, SVG/Canvas output, color interpolation, tooltip
//! layout) happens in a browser-side renderer that is an external collaborator of this crate.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use choromap::{Attributes, ChoromapError, EventData, InboundMessage, MapBuilder};
//!
//! let mut map = MapBuilder::default()
//!     .with_min_width(1024.0)
//!     .with_selected(vec!["FRA".to_owned()])
//!     .build()
//!     .expect("default configuration is valid");
//!
//! map.on_hover(
//!     Arc::new(
//!         |_attributes: &mut Attributes, payload: &EventData| -> Result<(), ChoromapError> {
//!             println!("hovering over {:?}", payload.get("id"));
//!             Ok(())
//!         },
//!     ),
//!     false,
//! );
//!
//! // The host transport feeds renderer messages into the widget:
//! let message = InboundMessage::from_json(serde_json::json!({"event": "hover", "id": "ESP"}))?;
//! map.process_message(&message)?;
//! # Ok::<(), choromap::ChoromapError>(())
//! ```
//!
//! # Main components
//!
//! * [`Attributes`] holds the fixed table of synchronized configuration fields with their
//!   defaults. Every successful write is mirrored to the renderer through a
//! * [`Messenger`], the outbound half of the host/renderer boundary. The inbound half is an
//! * [`InboundMessage`], which a [`MessageRouter`](control::MessageRouter) forwards to the
//!   matching [`CallbackDispatcher`](control::CallbackDispatcher) ("click" and "hover" are the
//!   only recognized events).
//! * [`Map`] composes the above into one widget instance, and [`MapBuilder`] constructs it.
//! * [`ViewRegistry`] binds model identifiers to constructors and to the browser-side views
//!   implementing them.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod attributes;
mod color;
pub mod control;
pub mod error;
mod map;
mod messenger;
mod registry;

pub use attributes::{AttrKind, AttrValue, Attribute, Attributes, RefKind, WidgetRef};
pub use color::Color;
pub use control::{CallbackRef, ErrorPolicy, EventCallback, EventData, InboundMessage};
pub use error::ChoromapError;
pub use map::{Map, MapBuilder};
pub use messenger::{DummyMessenger, Messenger};
pub use registry::{ViewBinding, ViewRegistry, MAP_MODEL};
