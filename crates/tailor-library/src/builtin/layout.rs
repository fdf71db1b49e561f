//! Row and column layout elements.

use tailor_elements::{Control, Element, ElementBehavior, Section, Setting};

/// A horizontal container of columns.
#[derive(Debug, Default)]
pub struct RowElement;

impl ElementBehavior for RowElement {
    fn register_controls(&self, element: &mut Element) {
        element.add_setting(Setting::new("gutter").with_default("medium"));
        element.add_setting(Setting::new("vertical_alignment").with_default("top"));

        element.add_section(Section::new("general", "General"));

        element.add_control(
            Control::new("gutter", "select", "general")
                .with_setting("gutter")
                .with_label("Column spacing")
                .with_priority(10)
                .with_choice("none", "None")
                .with_choice("small", "Small")
                .with_choice("medium", "Medium")
                .with_choice("large", "Large"),
        );
        element.add_control(
            Control::new("vertical_alignment", "select", "general")
                .with_setting("vertical_alignment")
                .with_label("Vertical alignment")
                .with_priority(20)
                .with_choice("top", "Top")
                .with_choice("middle", "Middle")
                .with_choice("bottom", "Bottom"),
        );
    }
}

/// One column inside a row.
#[derive(Debug, Default)]
pub struct ColumnElement;

impl ElementBehavior for ColumnElement {
    fn register_controls(&self, element: &mut Element) {
        element.add_setting(Setting::new("width"));

        element.add_section(Section::new("general", "General"));

        element.add_control(
            Control::new("width", "text", "general")
                .with_setting("width")
                .with_label("Width (%)")
                .with_priority(10),
        );
    }
}
