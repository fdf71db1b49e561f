//! Library manifest (`tailor.toml`).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use tailor_elements::Extensions;
use tailor_library::{load_dir, register_builtins, ElementRegistry};

/// Manifest file structure (`tailor.toml`).
#[derive(Debug, Deserialize, Default)]
pub struct ManifestFile {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    /// Directory of TOML element descriptors to load
    #[serde(default)]
    pub elements_dir: Option<PathBuf>,

    /// Tags excluded from the library
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Title shown on the preview page
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            elements_dir: None,
            disabled: Vec::new(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// Where `tailor export` writes the library
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_title() -> String {
    "Tailor".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("library.json")
}

impl ManifestFile {
    /// Load the manifest if it exists, defaults otherwise.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let manifest: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

        tracing::info!("Loaded manifest from {}", path.display());
        Ok(manifest)
    }

    /// Build the element registry this manifest describes: the built-in
    /// variants plus any descriptors found in the elements directory.
    pub fn registry(&self) -> Result<ElementRegistry> {
        let mut registry = ElementRegistry::new();
        register_builtins(&mut registry);

        if let Some(dir) = &self.library.elements_dir {
            if dir.exists() {
                let count = load_dir(&mut registry, dir)?;
                tracing::info!(
                    "Loaded {} element descriptors from {}",
                    count,
                    dir.display()
                );
            } else {
                tracing::warn!("Elements directory not found: {}", dir.display());
            }
        }

        Ok(registry)
    }

    /// Build the extension set this manifest describes. Disabled tags are
    /// wired up as an activation override.
    pub fn extensions(&self) -> Extensions {
        let mut extensions = Extensions::new();

        if !self.library.disabled.is_empty() {
            let disabled: HashSet<String> = self.library.disabled.iter().cloned().collect();
            extensions.on_element_active(move |active, definition| {
                active && !disabled.contains(&definition.tag)
            });
        }

        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_manifest_yields_defaults() {
        let manifest = ManifestFile::load(Path::new("/nonexistent/tailor.toml")).unwrap();

        assert_eq!(manifest.library.title, "Tailor");
        assert_eq!(manifest.export.output, PathBuf::from("library.json"));
        assert!(manifest.library.elements_dir.is_none());
    }

    #[test]
    fn parses_manifest_with_partial_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tailor.toml");
        fs::write(
            &path,
            r#"
[library]
disabled = ["widget"]
"#,
        )
        .unwrap();

        let manifest = ManifestFile::load(&path).unwrap();

        assert_eq!(manifest.library.disabled, ["widget"]);
        assert_eq!(manifest.library.title, "Tailor");
        assert_eq!(manifest.export.output, PathBuf::from("library.json"));
    }

    #[test]
    fn malformed_manifest_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tailor.toml");
        fs::write(&path, "[library\n").unwrap();

        assert!(ManifestFile::load(&path).is_err());
    }

    #[test]
    fn disabled_tags_are_dropped_from_the_library() {
        let manifest: ManifestFile = toml::from_str(
            r#"
[library]
disabled = ["widget", "row"]
"#,
        )
        .unwrap();

        let registry = manifest.registry().unwrap();
        let library = registry.library(&manifest.extensions());

        let tags: Vec<_> = library.iter().map(|e| e.record.tag.as_str()).collect();
        assert_eq!(tags, ["button", "heading", "column"]);
    }

    #[test]
    fn registry_includes_descriptors_from_elements_dir() {
        let temp = tempdir().unwrap();
        let elements = temp.path().join("elements");
        fs::create_dir_all(&elements).unwrap();
        fs::write(
            elements.join("quote.toml"),
            "tag = \"quote\"\nlabel = \"Quote\"\n",
        )
        .unwrap();

        let manifest: ManifestFile = toml::from_str(&format!(
            "[library]\nelements_dir = {:?}\n",
            elements.display().to_string()
        ))
        .unwrap();

        let registry = manifest.registry().unwrap();

        assert!(registry.contains("quote"));
        assert!(registry.contains("button"));
    }
}
