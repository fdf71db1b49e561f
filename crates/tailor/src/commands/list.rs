//! Element listing command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::ManifestFile;

/// Run the list command: print the registered element types.
pub async fn run(config: PathBuf) -> Result<()> {
    let manifest = ManifestFile::load(&config)?;

    let registry = manifest.registry()?;
    let extensions = manifest.extensions();
    let library = registry.library(&extensions);

    println!("{:<12} {:<16} {:<8} {}", "TAG", "LABEL", "TYPE", "BADGE");
    for element in &library {
        println!(
            "{:<12} {:<16} {:<8} {}",
            element.record.tag, element.record.label, element.record.kind, element.record.badge
        );
    }

    tracing::info!("{} elements registered", library.len());

    Ok(())
}
