//! Platform tables describing which icons to write and where
//!
//! A manifest is an ordered list of platform tables. Each table pairs a
//! platform name with the icons that platform's packaging layout expects.
//! The built-in manifest covers a Flutter project's Android launcher
//! mipmaps and its iOS `AppIcon.appiconset`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Built-in tables for the Android and iOS project folders
const BUILTIN_MANIFEST: &str = include_str!("icons.json");

/// A single icon to produce: its edge length in pixels and its destination
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Width and height of the square icon
    pub size: u32,

    /// Destination path, relative to the output root
    pub path: PathBuf,
}

/// The ordered icons belonging to one packaging system
#[derive(Deserialize, Debug, Clone)]
pub struct PlatformTable {
    /// Platform name (e.g., "android", "ios")
    pub platform: String,

    /// Icons in the order they are written
    pub icons: Vec<IconSpec>,
}

/// Every platform table, in the order the tables are written
#[derive(Deserialize, Debug, Clone)]
pub struct Manifest {
    pub platforms: Vec<PlatformTable>,
}

impl Manifest {
    /// Parses the manifest compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MANIFEST).context("Built-in icon manifest is malformed")
    }

    /// Parses a manifest from a JSON document
    ///
    /// # Arguments
    /// * `json` - Document of the form `{"platforms": [{"platform": ..., "icons": [...]}]}`
    ///
    /// Icon paths must be relative so they always land under the output root.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(json).context("Failed to parse icon manifest")?;

        if let Some(icon) = manifest
            .icons()
            .find(|icon| icon.path.is_absolute() || icon.path.has_root())
        {
            anyhow::bail!(
                "Icon path must be relative to the output directory: {}",
                icon.path.display()
            );
        }

        Ok(manifest)
    }

    /// Reads and parses a manifest file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    /// Keeps only the tables whose platform name is listed, in manifest order
    ///
    /// Fails if a requested platform has no table.
    pub fn retain_platforms(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            if !self.platforms.iter().any(|table| &table.platform == name) {
                let known: Vec<&str> = self.platforms.iter().map(|t| t.platform.as_str()).collect();
                anyhow::bail!(
                    "Unknown platform: {}. Available platforms: {}",
                    name,
                    known.join(", ")
                );
            }
        }

        self.platforms.retain(|table| names.contains(&table.platform));
        Ok(())
    }

    /// Total number of icons across all tables
    #[cfg(test)]
    pub fn icon_count(&self) -> usize {
        self.platforms.iter().map(|table| table.icons.len()).sum()
    }

    /// Every icon across all tables, in write order
    pub fn icons(&self) -> impl Iterator<Item = &IconSpec> {
        self.platforms.iter().flat_map(|table| table.icons.iter())
    }
}
