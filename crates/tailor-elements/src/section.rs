//! Sections: named groupings of controls, optionally nested in a panel.

use serde::Serialize;

use crate::extensions::Extensions;
use crate::panel::DEFAULT_PRIORITY;

/// A named grouping of controls.
///
/// A section may declare a panel by identifier; a section whose panel did not
/// survive preparation is dropped with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Unique identifier within the element
    pub id: String,

    /// Title shown in the editor
    pub title: String,

    /// Longer description shown in the editor
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Identifier of the owning panel, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,

    /// Sort priority, ascending
    pub priority: u32,

    /// Named capability required to see this section
    #[serde(skip)]
    pub capability: Option<String>,
}

impl Section {
    /// Create a panel-less section with the default priority.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            panel: None,
            priority: DEFAULT_PRIORITY,
            capability: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Place this section in a panel.
    pub fn with_panel(mut self, panel: impl Into<String>) -> Self {
        self.panel = Some(panel.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
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
