//! Tag version parsing and comparison
//!
//! Release tags in the wild are looser than strict semver: two-part cores
//! like `2.1-beta`, four-part cores, an optional `v` prefix. `TagVersion`
//! parses that shape and orders it semantically. Numeric components are
//! compared with zero padding; pre-release precedence is delegated to
//! [`semver::Prerelease`], so a plain release outranks any pre-release of
//! the same core.

use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;

/// A leniently parsed release tag version
#[derive(Debug, Clone)]
pub struct TagVersion {
    /// Dotted numeric core, most significant first
    numbers: Vec<u64>,

    /// Pre-release suffix; empty for a plain release
    pre: Prerelease,
}

impl TagVersion {
    /// Parse a tag name into a comparable version
    ///
    /// Accepts an optional `v`/`V` prefix, a dotted numeric core of any
    /// length, an optional `-` pre-release suffix, and ignores `+` build
    /// metadata. Returns `None` for anything else; callers treat an
    /// unparseable version as "never update".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);
        let raw = raw.split('+').next().unwrap_or(raw);

        let (core, pre) = match raw.split_once('-') {
            Some((core, pre)) => (core, pre),
            None => (raw, ""),
        };

        if core.is_empty() {
            return None;
        }

        let mut numbers = Vec::new();
        for part in core.split('.') {
            numbers.push(part.parse::<u64>().ok()?);
        }

        let pre = if pre.is_empty() {
            Prerelease::EMPTY
        } else {
            Prerelease::new(pre).ok()?
        };

        Some(Self { numbers, pre })
    }

    /// Whether this version is strictly newer than another
    pub fn is_newer_than(&self, other: &TagVersion) -> bool {
        self > other
    }
}

/// Compare two version strings, treating unparseable input as "not newer"
pub fn newer_than(candidate: &str, recorded: &str) -> bool {
    match (TagVersion::parse(candidate), TagVersion::parse(recorded)) {
        (Some(candidate), Some(recorded)) => candidate.is_newer_than(&recorded),
        _ => false,
    }
}

impl Ord for TagVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.numbers.len().max(other.numbers.len());
        for i in 0..len {
            let a = self.numbers.get(i).copied().unwrap_or(0);
            let b = other.numbers.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        self.pre.cmp(&other.pre)
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TagVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TagVersion {}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", core.join("."))?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}
