//! Button element: a styled link.

use tailor_elements::{Control, Element, ElementBehavior, Panel, Section, Setting};

/// A link styled as a button.
#[derive(Debug, Default)]
pub struct ButtonElement;

impl ElementBehavior for ButtonElement {
    fn register_controls(&self, element: &mut Element) {
        element.add_setting(Setting::new("text").with_default("Click here"));
        element.add_setting(Setting::new("href").with_default("#"));
        element.add_setting(Setting::new("alignment").with_default("left"));
        element.add_setting(Setting::new("color"));
        element.add_setting(Setting::new("background_color"));

        element.add_panel(Panel::new("style", "Style").with_priority(20));

        element.add_section(Section::new("general", "General").with_priority(10));
        element.add_section(
            Section::new("colors", "Colors")
                .with_panel("style")
                .with_priority(10),
        );

        element.add_control(
            Control::new("text", "text", "general")
                .with_setting("text")
                .with_label("Text")
                .with_priority(10),
        );
        element.add_control(
            Control::new("href", "text", "general")
                .with_setting("href")
                .with_label("Link")
                .with_priority(20),
        );
        element.add_control(
            Control::new("alignment", "select", "general")
                .with_setting("alignment")
                .with_label("Alignment")
                .with_priority(30)
                .with_choice("left", "Left")
                .with_choice("center", "Center")
                .with_choice("right", "Right"),
        );
        element.add_control(
            Control::new("color", "color", "colors")
                .with_setting("color")
                .with_label("Text color")
                .with_priority(40),
        );
        element.add_control(
            Control::new("background_color", "color", "colors")
                .with_setting("background_color")
                .with_label("Background color")
                .with_priority(50),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use tailor_elements::{ElementOptions, Extensions};

    fn prepared() -> Element {
        let extensions = Extensions::new();
        let mut element = Element::new("button", ButtonElement, ElementOptions::default());
        element.declare(&extensions);
        element.prepare(&extensions);
        element
    }

    #[test]
    fn every_control_survives_preparation() {
        let element = prepared();

        let controls: Vec<_> = element.controls().keys().collect();
        assert_eq!(
            controls,
            ["text", "href", "alignment", "color", "background_color"]
        );
        assert_eq!(element.sections().len(), 2);
        assert_eq!(element.panels().len(), 1);
    }

    #[test]
    fn renders_shortcode_with_attributes() {
        let element = prepared();

        let mut atts = IndexMap::new();
        atts.insert("href".to_string(), "#".to_string());

        assert_eq!(
            element.generate_shortcode("a1", atts, "Click here"),
            r##"[button href="#" class="tailor-a1"]Click here[/button]"##
        );
    }
}
