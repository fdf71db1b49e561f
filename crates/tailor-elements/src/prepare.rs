//! The preparation pass.
//!
//! Runs once per element after declaration, in fixed order (panels, then
//! sections, then controls) because each stage filters against the previous
//! stage's survivors. Entities whose dependencies are missing or vetoed are
//! filtered silently; host-side extensions add and remove items freely and
//! a dangling reference is expected, not an error.

use crate::element::Element;
use crate::extensions::Extensions;

impl Element {
    /// Phase two: sort, filter and rebuild the collections, then fire the
    /// "controls prepared" notification.
    ///
    /// No-op when the element was never declared or is already prepared.
    /// After this call:
    ///
    /// - every collection is ordered by ascending priority, with equal
    ///   priorities keeping their insertion order;
    /// - every retained section either has no panel or names a retained
    ///   panel;
    /// - every retained control names a retained section and a setting
    ///   present in the element's setting collection.
    pub fn prepare(&mut self, extensions: &Extensions) {
        if !self.is_declared() || self.is_prepared() {
            return;
        }

        self.prepare_panels(extensions);
        self.prepare_sections(extensions);
        self.prepare_controls(extensions);

        self.mark_prepared();
        extensions.fire_prepared(self);
    }

    fn prepare_panels(&mut self, extensions: &Extensions) {
        let mut panels: Vec<_> = self.take_panels().into_values().collect();
        panels.sort_by_key(|panel| panel.priority);

        for panel in panels {
            if !panel.check_capability(extensions)
                || !extensions.panel_enabled(&panel.id, self.definition())
            {
                tracing::debug!(tag = self.tag(), panel = %panel.id, "panel filtered");
                continue;
            }
            self.add_panel(panel);
        }
    }

    fn prepare_sections(&mut self, extensions: &Extensions) {
        let mut sections: Vec<_> = self.take_sections().into_values().collect();
        sections.sort_by_key(|section| section.priority);

        for section in sections {
            if !section.check_capability(extensions)
                || !extensions.section_enabled(&section.id, self.definition())
            {
                tracing::debug!(tag = self.tag(), section = %section.id, "section filtered");
                continue;
            }

            // A dangling panel reference drops the section, it is not
            // promoted to panel-less.
            if let Some(panel) = &section.panel {
                if self.panel(panel).is_none() {
                    tracing::debug!(
                        tag = self.tag(),
                        section = %section.id,
                        panel = %panel,
                        "section dropped, panel missing"
                    );
                    continue;
                }
            }

            self.add_section(section);
        }
    }

    fn prepare_controls(&mut self, extensions: &Extensions) {
        let mut controls: Vec<_> = self.take_controls().into_values().collect();
        controls.sort_by_key(|control| control.priority);

        for control in controls {
            let Some(setting) = control.setting.as_deref() else {
                tracing::debug!(tag = self.tag(), control = %control.id, "unbound control dropped");
                continue;
            };

            if !control.check_capability(extensions)
                || !extensions.control_enabled(&control.id, self.definition())
            {
                tracing::debug!(tag = self.tag(), control = %control.id, "control filtered");
                continue;
            }

            if self.section(&control.section).is_none() || self.setting(setting).is_none() {
                tracing::debug!(
                    tag = self.tag(),
                    control = %control.id,
                    "control dropped, section or setting missing"
                );
                continue;
            }

            self.add_control(control);
        }
    }
}
