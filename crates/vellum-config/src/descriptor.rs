//! Root site descriptor.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::nav::{ResolvedNavItem, ResolvedSidebarEntry};
use crate::theme::ThemeConfig;

/// Matches `scheme:` prefixes such as `https:`, `mailto:` or `tel:`.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid scheme regex"));

/// Configuration file structure (vellum.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    /// Site title
    pub title: String,

    /// Site description for meta tags
    #[serde(default)]
    pub description: String,

    /// Output directory for the generated site
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// URL prefix the site is served under
    #[serde(default = "default_base")]
    pub base: String,

    /// Directory holding the markdown sources, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<PathBuf>,

    /// Theme settings: navigation, sidebar, search, footer
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_base() -> String {
    "/".to_string()
}

impl SiteDescriptor {
    /// Create a descriptor with the given title and defaults everywhere else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            out_dir: default_out_dir(),
            base: default_base(),
            src_dir: None,
            theme: ThemeConfig::default(),
        }
    }

    /// Effective source directory, given the directory holding the config file.
    pub fn source_dir(&self, config_dir: &Path) -> PathBuf {
        match &self.src_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        }
    }

    /// Output directory, given the directory holding the config file.
    pub fn output_dir(&self, config_dir: &Path) -> PathBuf {
        if self.out_dir.is_absolute() {
            self.out_dir.clone()
        } else {
            config_dir.join(&self.out_dir)
        }
    }

    /// Base path with exactly one leading and one trailing slash.
    pub fn normalized_base(&self) -> String {
        let trimmed = self.base.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        }
    }

    /// Resolve a link target against the base path.
    ///
    /// External targets are returned unchanged.
    pub fn resolve_url(&self, target: &str) -> String {
        if is_external(target) {
            return target.to_string();
        }

        let relative = target.trim_start_matches("./").trim_start_matches('/');
        format!("{}{}", self.normalized_base(), relative)
    }

    /// Top navigation with resolved URLs, in authored order.
    pub fn resolve_navigation(&self) -> Vec<ResolvedNavItem> {
        self.theme
            .nav
            .iter()
            .map(|item| item.resolve(self))
            .collect()
    }

    /// Sidebar tree with resolved URLs and collapse state, in authored order.
    pub fn resolve_sidebar(&self) -> Vec<ResolvedSidebarEntry> {
        self.theme
            .sidebar
            .iter()
            .map(|section| section.resolve(self))
            .collect()
    }
}

/// Whether a link target points outside the site.
pub fn is_external(target: &str) -> bool {
    target.starts_with("//") || SCHEME.is_match(target)
}
