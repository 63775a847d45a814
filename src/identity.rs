//! Plugin identity loaded from the installed descriptor
//!
//! The descriptor is a plain-text header block: `Key: Value` lines, usually
//! wrapped in comment decoration, within the first 8 KiB of the plugin's main
//! file. A missing or unreadable descriptor yields an identity with empty
//! fields rather than an error; the slug is always derived from the
//! configured path so slug-keyed operations keep working.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Only the head of the descriptor is scanned for headers
const HEADER_SCAN_LIMIT: usize = 8192;

/// Identity of the installed plugin
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginIdentity {
    /// Path-like identifier within the host's plugin registry
    pub slug: String,

    /// Display name (`Name` header)
    pub name: String,

    /// Installed version string (`Version` header)
    pub version: String,

    /// Author display name (`AuthorName` header)
    pub author: String,

    /// Homepage URL (`PluginURI` header)
    pub homepage: String,

    /// Short description (`Description` header)
    pub description: String,
}

impl PluginIdentity {
    /// Load the identity from the plugin descriptor
    ///
    /// Never fails: unreadable descriptors leave the header fields empty,
    /// and callers treat a missing version as "never update".
    pub fn load(plugin_file: &Path, plugins_dir: &Path) -> Self {
        let mut identity = Self {
            slug: plugin_slug(plugin_file, plugins_dir),
            ..Self::default()
        };

        let raw = match fs::read(plugin_file) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Plugin descriptor {:?} unreadable: {}", plugin_file, e);
                return identity;
            }
        };

        let head = &raw[..raw.len().min(HEADER_SCAN_LIMIT)];
        let text = String::from_utf8_lossy(head);

        for line in text.lines() {
            fill(&mut identity.name, line, "Name");
            fill(&mut identity.version, line, "Version");
            fill(&mut identity.author, line, "AuthorName");
            fill(&mut identity.homepage, line, "PluginURI");
            fill(&mut identity.description, line, "Description");
        }

        identity
    }
}

/// Set `field` from `line` when it carries the header and the field is unset
fn fill(field: &mut String, line: &str, key: &str) {
    if field.is_empty() {
        if let Some(value) = header_value(line, key) {
            *field = value.to_string();
        }
    }
}

/// Extract the value of a `Key: Value` header line, tolerating comment
/// decoration before the key and after the value
fn header_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let line = line.trim_start_matches([' ', '\t', '/', '*', '#', '@']);
    let head = line.get(..key.len())?;
    if !head.eq_ignore_ascii_case(key) {
        return None;
    }
    let rest = line[key.len()..].strip_prefix(':')?;
    let value = rest.split("*/").next().unwrap_or(rest).trim();
    Some(value)
}

/// Derive the host-registry slug for a plugin file
///
/// The slug is the descriptor path relative to the plugins directory with
/// `/`-separated components; for files outside the plugins directory it
/// falls back to the last two path components.
pub fn plugin_slug(plugin_file: &Path, plugins_dir: &Path) -> String {
    let relative: PathBuf = match plugin_file.strip_prefix(plugins_dir) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => {
            let mut tail: Vec<_> = plugin_file.components().rev().take(2).collect();
            tail.reverse();
            tail.iter().collect()
        }
    };

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
