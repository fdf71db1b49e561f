//! Settings: named, persisted configuration values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a changed setting value reaches the preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// The preview refreshes when the value changes.
    #[default]
    Refresh,
    /// The editor applies the change itself, no refresh.
    None,
}

/// A named value descriptor owned by an element.
///
/// Controls reference settings by identifier; a control whose setting is
/// missing does not survive preparation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setting {
    /// Unique identifier within the element
    pub id: String,

    /// Default value, used until the editor supplies one
    pub default: Value,

    /// How value changes reach the preview
    pub transport: Transport,
}

impl Setting {
    /// Create a setting with a null default and refresh transport.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default: Value::Null,
            transport: Transport::default(),
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Set the transport.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_null_refresh() {
        let setting = Setting::new("text");

        assert_eq!(setting.id, "text");
        assert_eq!(setting.default, Value::Null);
        assert_eq!(setting.transport, Transport::Refresh);
    }

    #[test]
    fn serializes_wire_record() {
        let setting = Setting::new("href")
            .with_default("#")
            .with_transport(Transport::None);

        let json = serde_json::to_value(&setting).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "href",
                "default": "#",
                "transport": "none",
            })
        );
    }
}
