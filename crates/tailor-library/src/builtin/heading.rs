//! Heading element.

use tailor_elements::{Control, Element, ElementBehavior, Section, Setting};

/// A page heading with a configurable level.
#[derive(Debug, Default)]
pub struct HeadingElement;

impl ElementBehavior for HeadingElement {
    fn register_controls(&self, element: &mut Element) {
        element.add_setting(Setting::new("text").with_default("Heading"));
        element.add_setting(Setting::new("level").with_default("h2"));
        element.add_setting(Setting::new("alignment").with_default("left"));

        element.add_section(Section::new("general", "General"));

        element.add_control(
            Control::new("text", "text", "general")
                .with_setting("text")
                .with_label("Text")
                .with_priority(10),
        );

        let mut level = Control::new("level", "select", "general")
            .with_setting("level")
            .with_label("Level")
            .with_priority(20);
        for n in 1..=6 {
            level = level.with_choice(format!("h{n}"), format!("Heading {n}"));
        }
        element.add_control(level);

        element.add_control(
            Control::new("alignment", "select", "general")
                .with_setting("alignment")
                .with_label("Alignment")
                .with_priority(30)
                .with_choice("left", "Left")
                .with_choice("center", "Center")
                .with_choice("right", "Right"),
        );
    }
}
