//! Element composition model for the Tailor page builder.
//!
//! An element is a configuration node a visual editor can work with: a
//! variant declares settings, panels, sections and controls, a preparation
//! pass resolves the cross-references between them, and the surviving tree
//! is serialized for the editor client. Rendering stays with the host; this
//! crate only generates the shortcode directives the host expands.
//!
//! The lifecycle is host-driven and two-phase:
//!
//! ```rust
//! use tailor_elements::{
//!     Control, Element, ElementBehavior, ElementOptions, Extensions, Section, Setting,
//! };
//!
//! struct Quote;
//!
//! impl ElementBehavior for Quote {
//!     fn register_controls(&self, element: &mut Element) {
//!         element.add_setting(Setting::new("text").with_default("..."));
//!         element.add_section(Section::new("general", "General"));
//!         element.add_control(
//!             Control::new("text", "textarea", "general").with_setting("text"),
//!         );
//!     }
//! }
//!
//! let extensions = Extensions::new();
//! let mut element = Element::new("quote", Quote, ElementOptions::default().label("Quote"));
//! element.declare(&extensions);
//! element.prepare(&extensions);
//!
//! let json = element.to_json(&extensions);
//! assert_eq!(json.controls.len(), 1);
//! ```

pub mod control;
pub mod element;
pub mod extensions;
pub mod panel;
mod prepare;
pub mod section;
pub mod setting;
pub mod shortcode;

pub use control::Control;
pub use element::{
    ActiveCallback, Element, ElementBehavior, ElementDefinition, ElementJson, ElementOptions,
    ElementRecord,
};
pub use extensions::Extensions;
pub use panel::{Panel, DEFAULT_PRIORITY};
pub use section::Section;
pub use setting::{Setting, Transport};
