//! Tag-driven update feed for plugins managed by a host updater
//!
//! Watches a GitHub repository's tag listing and feeds pre-release builds
//! into a host's own update machinery. The host stays in charge of checking
//! schedules, downloads and unpacking; this crate supplies the decisions
//! and metadata its hooks need.
//!
//! Provides:
//! - Plugin identity parsed from a header-block descriptor file
//! - Pre-release candidate selection from the repository tag listing
//! - Update offers against the host's recorded version map
//! - Update metadata for the host's plugin information view
//! - Post-install directory normalization and activation restore
//!
//! # Example
//!
//! ```no_run
//! use betafeed::{UpdateChecker, UpdateConfig, UpdateTransient};
//!
//! # async fn check() -> anyhow::Result<()> {
//! let config = UpdateConfig::new(
//!     "acme",
//!     "widget",
//!     "/srv/plugins/widget/widget.ini",
//!     "/srv/plugins",
//! );
//! let checker = UpdateChecker::new(config)?;
//!
//! let mut transient = UpdateTransient::default();
//! transient
//!     .checked
//!     .insert("widget/widget.ini".to_string(), "1.4.0".to_string());
//!
//! if let Some(update) = checker.decide_update(&transient.checked).await {
//!     transient.response.insert(update.slug.clone(), update);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod identity;
pub mod tags;
pub mod updater;
pub mod version;

pub use config::{NetworkConfig, UpdateConfig};
pub use error::{Error, Result};
pub use host::{
    ActivationManager, FileMover, FsMover, InstallOutcome, PluginInfo, UpdateDescriptor,
    UpdateTransient,
};
pub use identity::PluginIdentity;
pub use tags::{select_prerelease, Tag, TagFetcher, PRERELEASE_MARKERS};
pub use updater::UpdateChecker;
pub use version::TagVersion;
