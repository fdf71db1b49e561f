//! Panels: named groupings of sections.

use serde::Serialize;

use crate::extensions::Extensions;

/// Default priority for panels, sections and controls.
pub const DEFAULT_PRIORITY: u32 = 10;

/// A named grouping of sections in the editor sidebar.
///
/// Panels are not part of the serialized element; sections carry their panel
/// identifier instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Unique identifier within the element
    pub id: String,

    /// Title shown in the editor
    pub title: String,

    /// Longer description shown in the editor
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Sort priority, ascending
    pub priority: u32,

    /// Named capability required to see this panel
    #[serde(skip)]
    pub capability: Option<String>,
}

impl Panel {
    /// Create a panel with the default priority and no capability requirement.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            capability: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
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
