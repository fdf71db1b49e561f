//! Widget element: dynamically generated host content.

use std::collections::HashMap;

use serde_json::Value;

use tailor_elements::{Control, Element, ElementBehavior, Section, Setting};

/// A host-rendered widget area.
///
/// Widget content is generated at render time, so the element is registered
/// as dynamic and stays represented as a shortcode in the editor. Captured
/// submission values, when present, prefill the widget's settings through
/// `post_value`.
#[derive(Debug, Default)]
pub struct WidgetElement {
    prefill: HashMap<String, Value>,
}

impl WidgetElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture submitted values to prefill settings with.
    pub fn with_prefill(mut self, prefill: HashMap<String, Value>) -> Self {
        self.prefill = prefill;
        self
    }
}

impl ElementBehavior for WidgetElement {
    fn register_controls(&self, element: &mut Element) {
        element.add_setting(Setting::new("title"));
        element.add_setting(Setting::new("widget_id"));

        element.add_section(Section::new("general", "General"));

        element.add_control(
            Control::new("title", "text", "general")
                .with_setting("title")
                .with_label("Title")
                .with_priority(10),
        );
        element.add_control(
            Control::new("widget_id", "text", "general")
                .with_setting("widget_id")
                .with_label("Widget")
                .with_priority(20),
        );
    }

    fn post_value(&self, _element: &Element, setting: &Setting, _default: &Value) -> Option<Value> {
        self.prefill.get(&setting.id).cloned()
    }
}
