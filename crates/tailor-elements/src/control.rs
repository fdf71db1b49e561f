//! Controls: UI widgets bound to a setting and placed in a section.

use indexmap::IndexMap;
use serde::Serialize;

use crate::extensions::Extensions;
use crate::panel::DEFAULT_PRIORITY;

/// A UI widget the editor renders for one setting.
///
/// The `kind` names the widget type the editor client knows how to render
/// (`text`, `textarea`, `select`, `color`, ...). A control is only usable if
/// both its section and its bound setting exist; preparation enforces this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    /// Unique identifier within the element
    pub id: String,

    /// Widget type rendered by the editor client
    #[serde(rename = "type")]
    pub kind: String,

    /// Label shown next to the widget
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Identifier of the owning section
    pub section: String,

    /// Identifier of the bound setting; an unbound control is dropped
    /// during preparation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,

    /// Sort priority, ascending
    pub priority: u32,

    /// Ordered value -> label choices for choice-style widgets
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub choices: IndexMap<String, String>,

    /// Named capability required to see this control
    #[serde(skip)]
    pub capability: Option<String>,
}

impl Control {
    /// Create an unbound control with the default priority.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: String::new(),
            section: section.into(),
            setting: None,
            priority: DEFAULT_PRIORITY,
            choices: IndexMap::new(),
            capability: None,
        }
    }

    /// Bind this control to a setting.
    pub fn with_setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = Some(setting.into());
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a choice for choice-style widgets. Choices keep insertion order.
    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.insert(value.into(), label.into());
        self
    }

    /// Require a named capability.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    /// Check the capability requirement against the installed checker.
    pub fn check_capability(&self, extensions: &Extensions) -> bool {
        extensions.allows(self.capability.as_deref())
    }
}
