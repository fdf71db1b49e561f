//! The element composition node.
//!
//! An [`Element`] pairs an [`ElementDefinition`] (identity and editor
//! attributes) with the settings, panels, sections and controls a variant
//! declares, and exposes the prepared result to the editor client as JSON.
//!
//! Initialization is an explicit two-phase contract: the host calls
//! [`Element::declare`] once the element library is assembled, then
//! [`Element::prepare`], in that order. Both phases consult the injected
//! [`Extensions`] set.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::control::Control;
use crate::extensions::Extensions;
use crate::panel::Panel;
use crate::section::Section;
use crate::setting::Setting;
use crate::shortcode;

/// The behavior a concrete element variant supplies.
///
/// `register_controls` declares the variant's settings, panels, sections and
/// controls; there is no default, a variant without it cannot exist.
pub trait ElementBehavior: Send + Sync {
    /// Declare this variant's settings, panels, sections and controls.
    fn register_controls(&self, element: &mut Element);

    /// The unsanitized value used to prefill a setting, if the variant has
    /// one. The default behavior has none.
    fn post_value(&self, element: &Element, setting: &Setting, default: &Value) -> Option<Value> {
        let _ = (element, setting, default);
        None
    }
}

/// Predicate deciding whether an element is currently usable.
#[derive(Clone)]
pub struct ActiveCallback(Arc<dyn Fn(&Element) -> bool + Send + Sync>);

impl ActiveCallback {
    /// Wrap a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    fn call(&self, element: &Element) -> bool {
        (self.0)(element)
    }
}

impl fmt::Debug for ActiveCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActiveCallback")
    }
}

/// Identity and editor-facing attributes of an element type.
#[derive(Debug, Clone)]
pub struct ElementDefinition {
    /// Unique tag, fixed at construction
    pub tag: String,

    /// Label shown in the editor
    pub label: String,

    /// Description shown in the editor
    pub description: String,

    /// Badge shown in the editor
    pub badge: String,

    /// Element type, `element` unless overridden
    pub kind: String,

    /// Tag of the child item type, if the element contains one
    pub child: Option<String>,

    /// True if the element content is generated at render time; dynamic
    /// elements stay represented as shortcodes in the editor
    pub dynamic: bool,

    /// Optional activation predicate, see [`Element::active`]
    pub active_callback: Option<ActiveCallback>,
}

impl ElementDefinition {
    /// Build a definition for `tag`, merging `options` over the defaults.
    pub fn new(tag: impl Into<String>, options: ElementOptions) -> Self {
        let mut definition = Self {
            tag: tag.into(),
            label: String::new(),
            description: String::new(),
            badge: String::new(),
            kind: "element".to_string(),
            child: None,
            dynamic: false,
            active_callback: None,
        };
        definition.apply(options);
        definition
    }

    /// Merge present option fields over the current values. The tag is not
    /// an option and never changes.
    fn apply(&mut self, options: ElementOptions) {
        if let Some(label) = options.label {
            self.label = label;
        }
        if let Some(description) = options.description {
            self.description = description;
        }
        if let Some(badge) = options.badge {
            self.badge = badge;
        }
        if let Some(kind) = options.kind {
            self.kind = kind;
        }
        if let Some(child) = options.child {
            self.child = Some(child);
        }
        if let Some(dynamic) = options.dynamic {
            self.dynamic = dynamic;
        }
        if let Some(active_callback) = options.active_callback {
            self.active_callback = Some(active_callback);
        }
    }
}

/// Optional attribute overrides supplied at construction.
///
/// Every present field overwrites the corresponding definition default.
#[derive(Debug, Clone, Default)]
pub struct ElementOptions {
    pub label: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub kind: Option<String>,
    pub child: Option<String>,
    pub dynamic: Option<bool>,
    pub active_callback: Option<ActiveCallback>,
}

impl ElementOptions {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    pub fn active_callback<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        self.active_callback = Some(ActiveCallback::new(predicate));
        self
    }
}

/// Flat projection of an element, see [`Element::to_array`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub tag: String,
    pub label: String,
    pub description: String,
    pub badge: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
    pub active: bool,
}

/// The wire record consumed by the editor client, see [`Element::to_json`].
#[derive(Debug, Clone, Serialize)]
pub struct ElementJson {
    #[serde(flatten)]
    pub record: ElementRecord,
    pub settings: Vec<Setting>,
    pub sections: Vec<Section>,
    pub controls: Vec<Control>,
}

/// A composable UI configuration node exposed to the visual editor.
pub struct Element {
    definition: ElementDefinition,
    behavior: Arc<dyn ElementBehavior>,
    settings: IndexMap<String, Setting>,
    panels: IndexMap<String, Panel>,
    sections: IndexMap<String, Section>,
    controls: IndexMap<String, Control>,
    declared: bool,
    prepared: bool,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("definition", &self.definition)
            .field("settings", &self.settings)
            .field("panels", &self.panels)
            .field("sections", &self.sections)
            .field("controls", &self.controls)
            .field("declared", &self.declared)
            .field("prepared", &self.prepared)
            .finish()
    }
}

impl Element {
    /// Create an element from a behavior value.
    pub fn new<B>(tag: impl Into<String>, behavior: B, options: ElementOptions) -> Self
    where
        B: ElementBehavior + 'static,
    {
        Self::from_arc(tag, Arc::new(behavior), options)
    }

    /// Create an element from a shared behavior.
    pub fn from_arc(
        tag: impl Into<String>,
        behavior: Arc<dyn ElementBehavior>,
        options: ElementOptions,
    ) -> Self {
        Self {
            definition: ElementDefinition::new(tag, options),
            behavior,
            settings: IndexMap::new(),
            panels: IndexMap::new(),
            sections: IndexMap::new(),
            controls: IndexMap::new(),
            declared: false,
            prepared: false,
        }
    }

    /// The element tag.
    pub fn tag(&self) -> &str {
        &self.definition.tag
    }

    /// The element definition.
    pub fn definition(&self) -> &ElementDefinition {
        &self.definition
    }

    /// Whether this element is usable right now.
    ///
    /// `true` unless an activation predicate is set and returns `false`; the
    /// raw result then passes through the extension set's activation
    /// overrides. This single check gates both control registration and
    /// library serialization.
    pub fn active(&self, extensions: &Extensions) -> bool {
        let raw = match &self.definition.active_callback {
            Some(predicate) => predicate.call(self),
            None => true,
        };
        extensions.is_active(raw, &self.definition)
    }

    /// Phase one: declare controls.
    ///
    /// No-op when the element is inactive or already declared. Calls the
    /// variant's `register_controls`, then the global "controls registered"
    /// observers, then the tag-scoped ones.
    pub fn declare(&mut self, extensions: &Extensions) {
        if self.declared || !self.active(extensions) {
            return;
        }
        self.declared = true;

        let behavior = Arc::clone(&self.behavior);
        behavior.register_controls(self);

        extensions.fire_registered(self);
    }

    pub(crate) fn is_declared(&self) -> bool {
        self.declared
    }

    pub(crate) fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub(crate) fn mark_prepared(&mut self) {
        self.prepared = true;
    }

    /// Add a setting. An existing setting with the same id is replaced.
    pub fn add_setting(&mut self, setting: Setting) {
        self.settings.insert(setting.id.clone(), setting);
    }

    /// Add a panel. An existing panel with the same id is replaced.
    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.insert(panel.id.clone(), panel);
    }

    /// Add a section. An existing section with the same id is replaced.
    pub fn add_section(&mut self, section: Section) {
        self.sections.insert(section.id.clone(), section);
    }

    /// Add a control. An existing control with the same id is replaced.
    pub fn add_control(&mut self, control: Control) {
        self.controls.insert(control.id.clone(), control);
    }

    /// Look up a setting by id.
    pub fn setting(&self, id: &str) -> Option<&Setting> {
        self.settings.get(id)
    }

    /// Look up a panel by id.
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Look up a control by id.
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    /// Remove a setting by id.
    pub fn remove_setting(&mut self, id: &str) -> Option<Setting> {
        self.settings.shift_remove(id)
    }

    /// Remove a panel by id.
    pub fn remove_panel(&mut self, id: &str) -> Option<Panel> {
        self.panels.shift_remove(id)
    }

    /// Remove a section by id.
    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        self.sections.shift_remove(id)
    }

    /// Remove a control by id.
    pub fn remove_control(&mut self, id: &str) -> Option<Control> {
        self.controls.shift_remove(id)
    }

    /// The settings collection, in current order.
    pub fn settings(&self) -> &IndexMap<String, Setting> {
        &self.settings
    }

    /// The panels collection, in current order.
    pub fn panels(&self) -> &IndexMap<String, Panel> {
        &self.panels
    }

    /// The sections collection, in current order.
    pub fn sections(&self) -> &IndexMap<String, Section> {
        &self.sections
    }

    /// The controls collection, in current order.
    pub fn controls(&self) -> &IndexMap<String, Control> {
        &self.controls
    }

    pub(crate) fn take_panels(&mut self) -> IndexMap<String, Panel> {
        std::mem::take(&mut self.panels)
    }

    pub(crate) fn take_sections(&mut self) -> IndexMap<String, Section> {
        std::mem::take(&mut self.sections)
    }

    pub(crate) fn take_controls(&mut self) -> IndexMap<String, Control> {
        std::mem::take(&mut self.controls)
    }

    /// The unsanitized value used to prefill a setting, if the variant
    /// supplies one.
    pub fn post_value(&self, setting_id: &str, default: &Value) -> Option<Value> {
        let setting = self.settings.get(setting_id)?;
        self.behavior.post_value(self, setting, default)
    }

    /// Flat attribute projection: tag, label, description, badge, type,
    /// child (when set) and the current `active()` result.
    ///
    /// Pure; calling it twice with unchanged state yields identical records.
    pub fn to_array(&self, extensions: &Extensions) -> ElementRecord {
        ElementRecord {
            tag: self.definition.tag.clone(),
            label: self.definition.label.clone(),
            description: self.definition.description.clone(),
            badge: self.definition.badge.clone(),
            kind: self.definition.kind.clone(),
            child: self.definition.child.clone(),
            active: self.active(extensions),
        }
    }

    /// The record handed to the editor client: [`Element::to_array`] plus
    /// the settings, sections and controls in current collection order.
    pub fn to_json(&self, extensions: &Extensions) -> ElementJson {
        ElementJson {
            record: self.to_array(extensions),
            settings: self.settings.values().cloned().collect(),
            sections: self.sections.values().cloned().collect(),
            controls: self.controls.values().cloned().collect(),
        }
    }

    /// Render the element as a shortcode directive.
    ///
    /// A non-empty `id` is appended to the `class` attribute as
    /// `tailor-{id}` so generated styling can target the markup. Attributes
    /// with empty values are skipped; values are interpolated as-is, callers
    /// pre-sanitize.
    pub fn generate_shortcode(
        &self,
        id: &str,
        mut atts: IndexMap<String, String>,
        content: &str,
    ) -> String {
        if !id.is_empty() {
            let class = format!("tailor-{id}");
            let merged = match atts.get("class").map(|existing| existing.trim()) {
                Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
                _ => class,
            };
            atts.insert("class".to_string(), merged);
        }

        let tag = &self.definition.tag;
        let attributes = shortcode::attributes(&atts);
        if attributes.is_empty() {
            format!("[{tag}]{content}[/{tag}]")
        } else {
            format!("[{tag} {attributes}]{content}[/{tag}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Noop;

    impl ElementBehavior for Noop {
        fn register_controls(&self, _element: &mut Element) {}
    }

    struct Prefilled;

    impl ElementBehavior for Prefilled {
        fn register_controls(&self, element: &mut Element) {
            element.add_setting(Setting::new("text").with_default("hello"));
        }

        fn post_value(
            &self,
            _element: &Element,
            setting: &Setting,
            _default: &Value,
        ) -> Option<Value> {
            (setting.id == "text").then(|| Value::from("posted"))
        }
    }

    #[test]
    fn options_overwrite_defaults_field_by_field() {
        let element = Element::new(
            "row",
            Noop,
            ElementOptions::default()
                .label("Row")
                .badge("Layout")
                .child("column")
                .dynamic(true),
        );

        let definition = element.definition();
        assert_eq!(definition.tag, "row");
        assert_eq!(definition.label, "Row");
        assert_eq!(definition.badge, "Layout");
        assert_eq!(definition.kind, "element");
        assert_eq!(definition.child.as_deref(), Some("column"));
        assert!(definition.dynamic);
        assert!(definition.description.is_empty());
    }

    #[test]
    fn active_defaults_to_true() {
        let element = Element::new("hero", Noop, ElementOptions::default());

        assert!(element.active(&Extensions::new()));
    }

    #[test]
    fn active_uses_predicate_result() {
        let element = Element::new(
            "hero",
            Noop,
            ElementOptions::default().active_callback(|_| false),
        );

        assert!(!element.active(&Extensions::new()));
    }

    #[test]
    fn activation_override_flips_either_result() {
        let mut extensions = Extensions::new();
        extensions.on_element_active(|active, _| !active);

        let plain = Element::new("hero", Noop, ElementOptions::default());
        assert!(!plain.active(&extensions));

        let vetoed = Element::new(
            "hero",
            Noop,
            ElementOptions::default().active_callback(|_| false),
        );
        assert!(vetoed.active(&extensions));
    }

    #[test]
    fn inactive_element_skips_declaration() {
        let mut element = Element::new(
            "hero",
            Prefilled,
            ElementOptions::default().active_callback(|_| false),
        );

        element.declare(&Extensions::new());

        assert!(!element.is_declared());
        assert!(element.settings().is_empty());
    }

    #[test]
    fn declare_runs_once() {
        let mut extensions = Extensions::new();
        extensions.on_controls_registered(|element| {
            let priority = element.controls().len() as u32;
            element.add_control(
                Control::new(format!("extra-{priority}"), "text", "general")
                    .with_setting("text"),
            );
        });

        let mut element = Element::new("hero", Prefilled, ElementOptions::default());
        element.declare(&extensions);
        element.declare(&extensions);

        assert_eq!(element.controls().len(), 1);
    }

    #[test]
    fn registered_observers_fire_global_then_tag_scoped() {
        let mut extensions = Extensions::new();
        extensions.on_controls_registered(|element| {
            element.add_section(Section::new("observers", "Observers"));
        });
        extensions.on_controls_registered_for("hero", |element| {
            // The global observer already ran.
            assert!(element.section("observers").is_some());
            element.add_section(Section::new("hero-only", "Hero"));
        });
        extensions.on_controls_registered_for("button", |element| {
            element.add_section(Section::new("button-only", "Button"));
        });

        let mut element = Element::new("hero", Noop, ElementOptions::default());
        element.declare(&extensions);

        assert!(element.section("observers").is_some());
        assert!(element.section("hero-only").is_some());
        assert!(element.section("button-only").is_none());
    }

    #[test]
    fn same_id_registration_overwrites() {
        let mut element = Element::new("hero", Noop, ElementOptions::default());
        element.add_setting(Setting::new("text").with_default("first"));
        element.add_setting(Setting::new("text").with_default("second"));

        assert_eq!(element.settings().len(), 1);
        assert_eq!(element.setting("text").unwrap().default, "second");
    }

    #[test]
    fn to_array_is_idempotent() {
        let element = Element::new(
            "button",
            Noop,
            ElementOptions::default().label("Button").badge("Content"),
        );
        let extensions = Extensions::new();

        let first = element.to_array(&extensions);
        let second = element.to_array(&extensions);

        assert_eq!(first, second);
        assert_eq!(first.tag, "button");
        assert_eq!(first.kind, "element");
        assert!(first.active);
        assert_eq!(first.child, None);
    }

    #[test]
    fn to_json_carries_collections_in_order() {
        let mut element = Element::new("button", Noop, ElementOptions::default());
        element.add_setting(Setting::new("text"));
        element.add_setting(Setting::new("href"));
        element.add_section(Section::new("general", "General"));
        element.add_control(Control::new("text", "text", "general").with_setting("text"));

        let json = serde_json::to_value(element.to_json(&Extensions::new())).unwrap();

        assert_eq!(json["tag"], "button");
        assert_eq!(json["type"], "element");
        assert_eq!(json["active"], true);
        assert!(json.get("child").is_none());

        let settings: Vec<_> = json["settings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(settings, ["text", "href"]);
        assert_eq!(json["sections"].as_array().unwrap().len(), 1);
        assert_eq!(json["controls"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn post_value_defaults_to_none() {
        let mut element = Element::new("hero", Noop, ElementOptions::default());
        element.add_setting(Setting::new("text"));

        assert_eq!(element.post_value("text", &Value::Null), None);
        assert_eq!(element.post_value("missing", &Value::Null), None);
    }

    #[test]
    fn post_value_delegates_to_behavior() {
        let mut element = Element::new("widget", Prefilled, ElementOptions::default());
        element.declare(&Extensions::new());

        assert_eq!(
            element.post_value("text", &Value::Null),
            Some(Value::from("posted"))
        );
    }

    #[test]
    fn shortcode_injects_class_for_id() {
        let element = Element::new("row", Noop, ElementOptions::default());

        let shortcode = element.generate_shortcode("x", IndexMap::new(), "body");

        assert_eq!(shortcode, r#"[row class="tailor-x"]body[/row]"#);
    }

    #[test]
    fn shortcode_appends_to_existing_class() {
        let element = Element::new("row", Noop, ElementOptions::default());
        let mut atts = IndexMap::new();
        atts.insert("class".to_string(), "wide".to_string());

        let shortcode = element.generate_shortcode("x", atts, "");

        assert_eq!(shortcode, r#"[row class="wide tailor-x"][/row]"#);
    }

    #[test]
    fn shortcode_skips_empty_attributes() {
        let element = Element::new("button", Noop, ElementOptions::default());
        let mut atts = IndexMap::new();
        atts.insert("href".to_string(), "#".to_string());
        atts.insert("target".to_string(), String::new());

        let shortcode = element.generate_shortcode("", atts, "Click");

        assert_eq!(shortcode, r##"[button href="#"]Click[/button]"##);
    }

    #[test]
    fn shortcode_without_id_or_attributes_is_bare() {
        let element = Element::new("divider", Noop, ElementOptions::default());

        let shortcode = element.generate_shortcode("", IndexMap::new(), "");

        assert_eq!(shortcode, "[divider][/divider]");
    }
}
