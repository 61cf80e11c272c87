//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{ClearCodesConfig, Config};

use crate::internal;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "footstep.toml";

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle them. Only top-level lines count: a `source` key
/// inside a `[section]` is ordinary data. Returns the extracted paths and the
/// remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();
    let mut top_level = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            top_level = false;
        }
        if top_level
            && let Some((key, value)) = trimmed.split_once('=')
            && key.trim() == "source"
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads `footstep.toml` from the platform config directory. A missing file
    /// yields the default (empty) config.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing fails or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text. `source` lines resolve relative to the working directory.
    ///
    /// # Errors
    /// TOML syntax errors, unreadable or cyclic includes.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Self::parse_with_sources(content, Path::new("."), &mut HashSet::new())
    }

    /// Recursive loader that expands includes while tracking visited paths in
    /// `seen` to break include cycles.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse_with_sources(&content, base, seen)
    }

    fn parse_with_sources(
        content: &str,
        base: &Path,
        seen: &mut HashSet<PathBuf>,
    ) -> Result<Self, crate::Error> {
        let (sources, toml_content) = extract_sources(content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = base.join(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Platform config directory (`~/.config/footstep/footstep.toml` on Linux).
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "footstep")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
