//! Extension points for observing and vetoing element composition.
//!
//! The host passes an [`Extensions`] set into the element lifecycle instead
//! of relying on ambient dispatch. Observers can force activation on or off,
//! veto individual panels, sections and controls by identifier, append
//! entities after a variant has declared its own, and react once preparation
//! completes.

use std::collections::HashMap;

use crate::element::{Element, ElementDefinition};

type ActivationOverride = Box<dyn Fn(bool, &ElementDefinition) -> bool + Send + Sync>;
type EnableOverride = Box<dyn Fn(bool, &ElementDefinition) -> bool + Send + Sync>;
type RegisteredObserver = Box<dyn Fn(&mut Element) + Send + Sync>;
type PreparedObserver = Box<dyn Fn(&Element) + Send + Sync>;
type CapabilityCheck = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// An injected set of extension callbacks.
///
/// With no callbacks installed every element is active, every capability
/// passes and nothing is vetoed.
#[derive(Default)]
pub struct Extensions {
    activation: Vec<ActivationOverride>,
    panel_overrides: HashMap<String, Vec<EnableOverride>>,
    section_overrides: HashMap<String, Vec<EnableOverride>>,
    control_overrides: HashMap<String, Vec<EnableOverride>>,
    registered: Vec<RegisteredObserver>,
    registered_for: HashMap<String, Vec<RegisteredObserver>>,
    prepared: Vec<PreparedObserver>,
    capability_check: Option<CapabilityCheck>,
}

impl Extensions {
    /// Create an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the capability checker.
    ///
    /// Entities without a capability requirement never consult it.
    pub fn set_capability_check<F>(&mut self, check: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.capability_check = Some(Box::new(check));
    }

    /// Resolve a capability requirement. `None` always passes.
    pub fn allows(&self, capability: Option<&str>) -> bool {
        match (capability, &self.capability_check) {
            (Some(capability), Some(check)) => check(capability),
            _ => true,
        }
    }

    /// Register an activation override.
    ///
    /// Overrides run in registration order; each receives the previous
    /// result and may force it either way.
    pub fn on_element_active<F>(&mut self, over: F)
    where
        F: Fn(bool, &ElementDefinition) -> bool + Send + Sync + 'static,
    {
        self.activation.push(Box::new(over));
    }

    /// Fold the raw activation result through the registered overrides.
    pub fn is_active(&self, raw: bool, definition: &ElementDefinition) -> bool {
        self.activation
            .iter()
            .fold(raw, |active, over| over(active, definition))
    }

    /// Veto or re-enable the panel with the given identifier.
    pub fn enable_panel<F>(&mut self, id: impl Into<String>, over: F)
    where
        F: Fn(bool, &ElementDefinition) -> bool + Send + Sync + 'static,
    {
        self.panel_overrides
            .entry(id.into())
            .or_default()
            .push(Box::new(over));
    }

    /// Veto or re-enable the section with the given identifier.
    pub fn enable_section<F>(&mut self, id: impl Into<String>, over: F)
    where
        F: Fn(bool, &ElementDefinition) -> bool + Send + Sync + 'static,
    {
        self.section_overrides
            .entry(id.into())
            .or_default()
            .push(Box::new(over));
    }

    /// Veto or re-enable the control with the given identifier.
    pub fn enable_control<F>(&mut self, id: impl Into<String>, over: F)
    where
        F: Fn(bool, &ElementDefinition) -> bool + Send + Sync + 'static,
    {
        self.control_overrides
            .entry(id.into())
            .or_default()
            .push(Box::new(over));
    }

    pub(crate) fn panel_enabled(&self, id: &str, definition: &ElementDefinition) -> bool {
        fold_overrides(&self.panel_overrides, id, definition)
    }

    pub(crate) fn section_enabled(&self, id: &str, definition: &ElementDefinition) -> bool {
        fold_overrides(&self.section_overrides, id, definition)
    }

    pub(crate) fn control_enabled(&self, id: &str, definition: &ElementDefinition) -> bool {
        fold_overrides(&self.control_overrides, id, definition)
    }

    /// Observe every element right after its controls are declared.
    ///
    /// Observers receive the element mutably and may add further settings,
    /// panels, sections and controls before preparation runs.
    pub fn on_controls_registered<F>(&mut self, observer: F)
    where
        F: Fn(&mut Element) + Send + Sync + 'static,
    {
        self.registered.push(Box::new(observer));
    }

    /// Observe one element type right after its controls are declared.
    ///
    /// Tag-scoped observers run after the global ones.
    pub fn on_controls_registered_for<F>(&mut self, tag: impl Into<String>, observer: F)
    where
        F: Fn(&mut Element) + Send + Sync + 'static,
    {
        self.registered_for
            .entry(tag.into())
            .or_default()
            .push(Box::new(observer));
    }

    /// Observe every element once preparation has completed.
    pub fn on_controls_prepared<F>(&mut self, observer: F)
    where
        F: Fn(&Element) + Send + Sync + 'static,
    {
        self.prepared.push(Box::new(observer));
    }

    pub(crate) fn fire_registered(&self, element: &mut Element) {
        for observer in &self.registered {
            observer(element);
        }
        if let Some(observers) = self.registered_for.get(element.tag()) {
            for observer in observers {
                observer(element);
            }
        }
    }

    pub(crate) fn fire_prepared(&self, element: &Element) {
        for observer in &self.prepared {
            observer(element);
        }
    }
}

fn fold_overrides(
    overrides: &HashMap<String, Vec<EnableOverride>>,
    id: &str,
    definition: &ElementDefinition,
) -> bool {
    match overrides.get(id) {
        Some(overrides) => overrides
            .iter()
            .fold(true, |enabled, over| over(enabled, definition)),
        None => true,
    }
}
