//! Built-in element variants.

pub mod button;
pub mod heading;
pub mod layout;
pub mod widget;

pub use button::ButtonElement;
pub use heading::HeadingElement;
pub use layout::{ColumnElement, RowElement};
pub use widget::WidgetElement;

use tailor_elements::ElementOptions;

use crate::registry::ElementRegistry;

/// Register every built-in element type.
pub fn register_builtins(registry: &mut ElementRegistry) {
    registry.register(
        "button",
        ButtonElement,
        ElementOptions::default()
            .label("Button")
            .description("A link styled as a button.")
            .badge("Content"),
    );
    registry.register(
        "heading",
        HeadingElement,
        ElementOptions::default()
            .label("Heading")
            .description("A page heading.")
            .badge("Content"),
    );
    registry.register(
        "row",
        RowElement,
        ElementOptions::default()
            .label("Row")
            .description("A horizontal container of columns.")
            .badge("Layout")
            .child("column"),
    );
    registry.register(
        "column",
        ColumnElement,
        ElementOptions::default()
            .label("Column")
            .badge("Layout")
            .kind("child"),
    );
    registry.register(
        "widget",
        WidgetElement::new(),
        ElementOptions::default()
            .label("Widget")
            .description("A host-rendered widget area.")
            .badge("Content")
            .dynamic(true),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_elements::Extensions;

    #[test]
    fn registers_all_builtin_tags() {
        let mut registry = ElementRegistry::new();
        register_builtins(&mut registry);

        assert_eq!(
            registry.tags(),
            ["button", "heading", "row", "column", "widget"]
        );
    }

    #[test]
    fn builtin_library_is_fully_prepared() {
        let mut registry = ElementRegistry::new();
        register_builtins(&mut registry);

        let library = registry.library(&Extensions::new());

        assert_eq!(library.len(), 5);
        for element in &library {
            assert!(element.record.active);
            for control in &element.controls {
                assert!(control.setting.is_some());
                assert!(element.sections.iter().any(|s| s.id == control.section));
            }
        }

        let row = library.iter().find(|e| e.record.tag == "row").unwrap();
        assert_eq!(row.record.child.as_deref(), Some("column"));

        let column = library.iter().find(|e| e.record.tag == "column").unwrap();
        assert_eq!(column.record.kind, "child");
    }
}
