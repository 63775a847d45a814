//! Contracts shared with the host plugin manager
//!
//! The host owns the update-check state and the install machinery; this
//! module fixes the shapes it exchanges with the checker and the two
//! capabilities the checker borrows at install time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Host-managed update-check state
///
/// The host records the versions it found installed under `checked` and
/// expects offered updates back under `response`, both keyed by slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTransient {
    /// Installed version per slug, as recorded by the host's last check
    #[serde(default)]
    pub checked: HashMap<String, String>,

    /// Offered updates per slug
    #[serde(default)]
    pub response: HashMap<String, UpdateDescriptor>,
}

/// One offered update, as published into the host's transient store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDescriptor {
    /// Slug of the plugin the offer applies to
    pub slug: String,

    /// Version the host would install, verbatim from the tag name
    pub new_version: String,

    /// Plugin homepage
    pub url: String,

    /// Download URL for the update archive
    pub package: String,
}

/// Update metadata for the host's plugin information view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Display name from the plugin descriptor
    pub name: String,

    /// Slug the metadata was requested for
    pub slug: String,

    /// Candidate version, verbatim from the tag name
    pub version: String,

    /// Author from the plugin descriptor
    pub author: String,

    /// Plugin homepage
    pub homepage: String,

    /// Download URL for the update archive
    pub download_link: String,

    /// Rendered sections of the view, keyed by section id
    pub sections: BTreeMap<String, String>,
}

/// Result of an install step, carried through post-install processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallOutcome {
    /// Directory the update archive was unpacked into
    pub destination: PathBuf,
}

/// Moves an unpacked plugin directory into place
pub trait FileMover {
    /// Move `from` to `to`; `to` must not already exist
    fn move_dir(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Restores plugin activation after an install
pub trait ActivationManager {
    /// Activate the plugin identified by `slug`
    fn activate(&self, slug: &str) -> Result<()>;
}

/// [`FileMover`] over [`std::fs::rename`]
///
/// Suits hosts whose plugin directory lives on a single filesystem; a
/// cross-device move needs a host-provided mover.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMover;

impl FileMover for FsMover {
    fn move_dir(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)
            .with_context(|| format!("Failed to move {:?} to {:?}", from, to))
    }
}
