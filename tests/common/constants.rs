//! Shared constants for test infrastructure
//!
//! Provides centralized slugs, version strings and tag names to eliminate
//! duplication across test files.

// Watched repository
pub const REPO_OWNER: &str = "acme";
pub const REPO_NAME: &str = "widget";

// Plugin under management
pub const SLUG: &str = "widget/widget.ini";
pub const OTHER_SLUG: &str = "gadget/gadget.ini";
pub const PLUGIN_FOLDER: &str = "widget";
pub const PLUGIN_FILE_NAME: &str = "widget.ini";
pub const PLUGIN_NAME: &str = "Widget Press";
pub const PLUGIN_AUTHOR: &str = "Ada Example";
pub const PLUGIN_HOMEPAGE: &str = "https://example.com/widget";
pub const PLUGIN_DESCRIPTION: &str = "Presses widgets into shape from the host dashboard.";

// Installed version recorded by the host
pub const INSTALLED_VERSION: &str = "1.4.0";

// Tag names as the repository lists them
pub const TAG_2_0: &str = "2.0";
pub const TAG_2_1_BETA: &str = "2.1-beta";
pub const TAG_1_9: &str = "1.9";
pub const TAG_3_0_ALPHA: &str = "3.0-alpha";

// Access token for private repository tests
pub const ACCESS_TOKEN: &str = "s3cret-token";
