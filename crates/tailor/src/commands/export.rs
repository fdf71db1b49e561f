//! Library export command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::ManifestFile;

/// Run the export command: write the serialized element library to disk.
pub async fn run(config: PathBuf, output: Option<PathBuf>, compact: bool) -> Result<()> {
    let manifest = ManifestFile::load(&config)?;

    let registry = manifest.registry()?;
    let extensions = manifest.extensions();
    let library = registry.library(&extensions);

    let json = if compact {
        serde_json::to_string(&library)?
    } else {
        serde_json::to_string_pretty(&library)?
    };

    let output = output.unwrap_or_else(|| manifest.export.output.clone());
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", parent.display(), e))?;
        }
    }
    fs::write(&output, json)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", output.display(), e))?;

    tracing::info!("Exported {} elements to {}", library.len(), output.display());

    Ok(())
}
