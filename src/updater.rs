//! Update checking against a GitHub repository's tag listing
//!
//! [`UpdateChecker`] backs three host hooks: deciding whether to offer an
//! update, describing the offered update for the plugin information view,
//! and normalizing the install once the host has unpacked it.

use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::UpdateConfig;
use crate::error::{Error, Result};
use crate::host::{ActivationManager, FileMover, InstallOutcome, PluginInfo, UpdateDescriptor};
use crate::identity::{plugin_slug, PluginIdentity};
use crate::tags::{append_access_token, select_prerelease, Tag, TagFetcher};
use crate::version::newer_than;

/// Update checker for one host-managed plugin
///
/// The checker is wired into the host's update hooks and consulted many
/// times per check cycle; the plugin identity and the remote candidate are
/// each resolved once and reused.
pub struct UpdateChecker {
    /// Watched repository and plugin location
    config: UpdateConfig,

    /// Tag listing client
    fetcher: TagFetcher,

    /// Identity parsed from the local plugin descriptor
    identity: OnceLock<PluginIdentity>,

    /// Selected pre-release candidate; `None` once a successful query
    /// found no marked tag
    candidate: OnceCell<Option<Tag>>,
}

impl UpdateChecker {
    /// Create a checker for the configured plugin and repository
    pub fn new(config: UpdateConfig) -> Result<Self> {
        debug!(
            "Update checker for {}/{} watching {:?}",
            config.repo_owner, config.repo_name, config.plugin_file
        );
        let fetcher = TagFetcher::new(config.clone())?;

        Ok(Self {
            config,
            fetcher,
            identity: OnceLock::new(),
            candidate: OnceCell::new(),
        })
    }

    /// Configuration the checker was built with
    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    /// Identity of the local plugin, loaded on first use
    pub fn identity(&self) -> &PluginIdentity {
        self.identity
            .get_or_init(|| PluginIdentity::load(&self.config.plugin_file, &self.config.plugins_dir))
    }

    /// The selected pre-release candidate, fetched on first use
    ///
    /// A successful query is cached for the life of the checker, including
    /// one that selected nothing. A failed query is not cached, so the next
    /// call asks the repository again.
    pub async fn candidate(&self) -> Option<&Tag> {
        let outcome = self
            .candidate
            .get_or_try_init(|| async {
                let tags = self.fetcher.list_tags().await?;
                Ok::<_, Error>(select_prerelease(&tags).cloned())
            })
            .await;

        match outcome {
            Ok(selected) => selected.as_ref(),
            Err(e) => {
                warn!("Tag listing unavailable, no update this cycle: {}", e);
                None
            }
        }
    }

    /// Decide whether to offer an update, given the host's recorded versions
    ///
    /// Offers the candidate tag when it compares newer than the version the
    /// host recorded for this plugin's slug. An empty map means the host has
    /// not completed a check cycle yet; no offer is made and the repository
    /// is not contacted.
    pub async fn decide_update(
        &self,
        checked: &HashMap<String, String>,
    ) -> Option<UpdateDescriptor> {
        if checked.is_empty() {
            return None;
        }

        let identity = self.identity();
        let recorded = checked.get(&identity.slug)?;
        let candidate = self.candidate().await?;

        if !newer_than(&candidate.name, recorded) {
            debug!(
                "Candidate {} does not beat recorded {}, nothing to offer",
                candidate.name, recorded
            );
            return None;
        }

        info!(
            "Offering update for {}: {} -> {}",
            identity.slug, recorded, candidate.name
        );

        Some(UpdateDescriptor {
            slug: identity.slug.clone(),
            new_version: candidate.name.clone(),
            url: identity.homepage.clone(),
            package: append_access_token(
                &candidate.zipball_url,
                self.config.access_token.as_deref(),
            ),
        })
    }

    /// Describe the offered update for the host's plugin information view
    ///
    /// Answers only for this plugin's slug and only while a candidate is
    /// selected; any other request yields `None` so the host falls through
    /// to its usual information source.
    pub async fn describe_update(&self, requested_slug: &str) -> Option<PluginInfo> {
        let identity = self.identity();
        if requested_slug.is_empty() || requested_slug != identity.slug {
            return None;
        }

        let candidate = self.candidate().await?;

        let mut sections = BTreeMap::new();
        sections.insert("description".to_string(), identity.description.clone());
        sections.insert("changelog".to_string(), self.config.changelog_text());

        Some(PluginInfo {
            name: identity.name.clone(),
            slug: identity.slug.clone(),
            version: candidate.name.clone(),
            author: identity.author.clone(),
            homepage: identity.homepage.clone(),
            download_link: append_access_token(
                &candidate.zipball_url,
                self.config.access_token.as_deref(),
            ),
            sections,
        })
    }

    /// Normalize a finished install of this plugin
    ///
    /// Archives unpack under a tag-derived directory name; this moves the
    /// unpacked tree to the plugin's canonical directory and, when the
    /// plugin was active before the install, re-activates it. Installs of
    /// other plugins pass through untouched.
    pub fn finalize_install(
        &self,
        mut outcome: InstallOutcome,
        installed_plugin: &Path,
        was_active: bool,
        mover: &dyn FileMover,
        activation: &dyn ActivationManager,
    ) -> anyhow::Result<InstallOutcome> {
        let identity = self.identity();
        let installed_slug = plugin_slug(installed_plugin, &self.config.plugins_dir);
        if installed_slug != identity.slug {
            debug!("Install of {} is not ours, passing through", installed_slug);
            return Ok(outcome);
        }

        let canonical = self.canonical_plugin_dir();
        info!(
            "Moving unpacked plugin from {:?} to {:?}",
            outcome.destination, canonical
        );
        mover
            .move_dir(&outcome.destination, &canonical)
            .with_context(|| format!("Failed to move unpacked plugin into {:?}", canonical))?;
        outcome.destination = canonical;

        if was_active {
            info!("Restoring activation of {}", identity.slug);
            activation
                .activate(&identity.slug)
                .with_context(|| format!("Failed to re-activate {}", identity.slug))?;
        }

        Ok(outcome)
    }

    /// Canonical install directory for this plugin
    ///
    /// The directory part of the slug, or the descriptor file stem for a
    /// single-file slug, resolved under the plugins directory.
    fn canonical_plugin_dir(&self) -> PathBuf {
        let identity = self.identity();
        let folder = match identity.slug.rsplit_once('/') {
            Some((directory, _)) => directory.to_string(),
            None => Path::new(&identity.slug)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| identity.slug.clone()),
        };
        self.config.plugins_dir.join(folder)
    }
}
