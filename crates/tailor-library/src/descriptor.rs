//! File-based element descriptors.
//!
//! A descriptor is a TOML file declaring a static element variant: its
//! editor attributes plus the settings, panels, sections and controls to
//! register. Descriptors let a host installation add element types without
//! compiling code, the file-based counterpart of registering a behavior.
//!
//! ```toml
//! tag = "quote"
//! label = "Quote"
//! badge = "Content"
//!
//! [[settings]]
//! id = "text"
//! default = "So shines a good deed in a weary world."
//!
//! [[sections]]
//! id = "general"
//! title = "General"
//!
//! [[controls]]
//! id = "text"
//! type = "textarea"
//! section = "general"
//! setting = "text"
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use tailor_elements::{
    Control, Element, ElementBehavior, ElementOptions, Panel, Section, Setting, DEFAULT_PRIORITY,
};

use crate::registry::ElementRegistry;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("Invalid tag regex"));

/// Errors that can occur when loading descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read descriptor: {0}")]
    ReadError(String),

    #[error("Failed to parse descriptor: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid element tag: {0:?}")]
    InvalidTag(String),
}

/// A parsed element descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDescriptor {
    /// Element tag, lowercase alphanumeric with `-`/`_`
    pub tag: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub badge: String,

    /// Element type override
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Child item tag, if any
    #[serde(default)]
    pub child: Option<String>,

    #[serde(default)]
    pub dynamic: bool,

    #[serde(default)]
    pub settings: Vec<SettingSpec>,

    #[serde(default)]
    pub panels: Vec<PanelSpec>,

    #[serde(default)]
    pub sections: Vec<SectionSpec>,

    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingSpec {
    pub id: String,
    #[serde(default)]
    pub default: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default)]
    pub capability: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub panel: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default)]
    pub capability: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    pub section: String,
    #[serde(default)]
    pub setting: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default)]
    pub choices: Vec<ChoiceSpec>,
    #[serde(default)]
    pub capability: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceSpec {
    pub value: String,
    pub label: String,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

impl ElementDescriptor {
    /// Parse a descriptor from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// The element options this descriptor declares.
    pub fn options(&self) -> ElementOptions {
        let mut options = ElementOptions::default()
            .label(self.label.clone())
            .description(self.description.clone())
            .badge(self.badge.clone());
        if let Some(kind) = &self.kind {
            options = options.kind(kind.clone());
        }
        if let Some(child) = &self.child {
            options = options.child(child.clone());
        }
        if self.dynamic {
            options = options.dynamic(true);
        }
        options
    }
}

/// Behavior replaying a descriptor's declarations.
#[derive(Debug, Clone)]
pub struct DescriptorElement {
    descriptor: ElementDescriptor,
}

impl DescriptorElement {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ElementBehavior for DescriptorElement {
    fn register_controls(&self, element: &mut Element) {
        for spec in &self.descriptor.settings {
            element.add_setting(Setting::new(spec.id.as_str()).with_default(spec.default.clone()));
        }

        for spec in &self.descriptor.panels {
            let mut panel = Panel::new(spec.id.as_str(), spec.title.as_str())
                .with_description(spec.description.as_str())
                .with_priority(spec.priority);
            if let Some(capability) = &spec.capability {
                panel = panel.with_capability(capability.as_str());
            }
            element.add_panel(panel);
        }

        for spec in &self.descriptor.sections {
            let mut section = Section::new(spec.id.as_str(), spec.title.as_str())
                .with_description(spec.description.as_str())
                .with_priority(spec.priority);
            if let Some(panel) = &spec.panel {
                section = section.with_panel(panel.as_str());
            }
            if let Some(capability) = &spec.capability {
                section = section.with_capability(capability.as_str());
            }
            element.add_section(section);
        }

        for spec in &self.descriptor.controls {
            let mut control = Control::new(spec.id.as_str(), spec.kind.as_str(), spec.section.as_str())
                .with_label(spec.label.as_str())
                .with_priority(spec.priority);
            if let Some(setting) = &spec.setting {
                control = control.with_setting(setting.as_str());
            }
            for choice in &spec.choices {
                control = control.with_choice(choice.value.as_str(), choice.label.as_str());
            }
            if let Some(capability) = &spec.capability {
                control = control.with_capability(capability.as_str());
            }
            element.add_control(control);
        }
    }
}

/// Load and validate a single descriptor file.
pub fn load_descriptor(path: &Path) -> Result<ElementDescriptor, DescriptorError> {
    let source = fs::read_to_string(path)
        .map_err(|e| DescriptorError::ReadError(format!("{}: {}", path.display(), e)))?;

    let descriptor =
        ElementDescriptor::from_toml(&source).map_err(|e| DescriptorError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    if !TAG_RE.is_match(&descriptor.tag) {
        return Err(DescriptorError::InvalidTag(descriptor.tag));
    }

    Ok(descriptor)
}

/// Scan a directory for `.toml` descriptors and register each as an element
/// type. Malformed files are skipped with a warning; the count of loaded
/// descriptors is returned.
pub fn load_dir(
    registry: &mut ElementRegistry,
    dir: &Path,
) -> Result<usize, DescriptorError> {
    if !dir.exists() {
        return Err(DescriptorError::DirectoryNotFound(
            dir.display().to_string(),
        ));
    }

    let mut count = 0;

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !path.is_file() || ext != "toml" {
            continue;
        }

        let descriptor = match load_descriptor(path) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!("Skipping descriptor {}: {}", path.display(), e);
                continue;
            }
        };

        let tag = descriptor.tag.clone();
        let options = descriptor.options();
        registry.register(tag, DescriptorElement::new(descriptor), options);
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tailor_elements::Extensions;
    use tempfile::tempdir;

    const QUOTE: &str = r#"
tag = "quote"
label = "Quote"
badge = "Content"

[[settings]]
id = "text"
default = "So shines a good deed in a weary world."

[[settings]]
id = "cite"

[[sections]]
id = "general"
title = "General"

[[controls]]
id = "text"
type = "textarea"
section = "general"
setting = "text"

[[controls]]
id = "cite"
type = "text"
section = "general"
setting = "cite"
priority = 20

[[controls.choices]]
value = "left"
label = "Left"
"#;

    #[test]
    fn parses_descriptor() {
        let descriptor = ElementDescriptor::from_toml(QUOTE).unwrap();

        assert_eq!(descriptor.tag, "quote");
        assert_eq!(descriptor.label, "Quote");
        assert_eq!(descriptor.settings.len(), 2);
        assert_eq!(descriptor.settings[1].default, Value::Null);
        assert_eq!(descriptor.controls[0].priority, DEFAULT_PRIORITY);
        assert_eq!(descriptor.controls[1].choices.len(), 1);
    }

    #[test]
    fn descriptor_element_registers_and_prepares() {
        let descriptor = ElementDescriptor::from_toml(QUOTE).unwrap();
        let options = descriptor.options();

        let extensions = Extensions::new();
        let mut element = Element::new("quote", DescriptorElement::new(descriptor), options);
        element.declare(&extensions);
        element.prepare(&extensions);

        assert_eq!(element.definition().label, "Quote");
        assert_eq!(element.settings().len(), 2);
        let controls: Vec<_> = element.controls().keys().collect();
        assert_eq!(controls, ["text", "cite"]);
    }

    #[test]
    fn load_dir_registers_descriptors_and_skips_bad_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("elements");
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("quote.toml"), QUOTE).unwrap();
        fs::write(dir.join("broken.toml"), "tag = [not toml").unwrap();
        fs::write(dir.join("bad-tag.toml"), "tag = \"Not A Tag\"").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let mut registry = ElementRegistry::new();
        let count = load_dir(&mut registry, &dir).unwrap();

        assert_eq!(count, 1);
        assert!(registry.contains("quote"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_dir_errors_on_missing_directory() {
        let temp = tempdir().unwrap();

        let mut registry = ElementRegistry::new();
        let result = load_dir(&mut registry, &temp.path().join("nowhere"));

        assert!(matches!(result, Err(DescriptorError::DirectoryNotFound(_))));
    }

    #[test]
    fn invalid_tag_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "tag = \"9starts-with-digit\"").unwrap();

        let result = load_descriptor(&path);

        assert!(matches!(result, Err(DescriptorError::InvalidTag(_))));
    }
}
