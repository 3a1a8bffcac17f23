//! Theme settings: navigation trees, search, social links, footer and
//! last-updated display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nav::{LinkRef, NavItem, SidebarSection};

/// Theme configuration (`[theme]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Top navigation bar, in display order
    #[serde(default)]
    pub nav: Vec<NavItem>,

    /// Sidebar sections, in display order
    #[serde(default)]
    pub sidebar: Vec<SidebarSection>,

    /// Search provider
    #[serde(default)]
    pub search: SearchProvider,

    /// Social icons shown in the navigation bar
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Labels for the previous/next page footer links
    #[serde(default)]
    pub footer: FooterLabels,

    /// How the last-updated timestamp is displayed
    #[serde(default)]
    pub last_updated: LastUpdated,
}

impl ThemeConfig {
    /// All navigation links, depth-first in authored order.
    pub fn nav_links(&self) -> Vec<LinkRef<'_>> {
        let mut links = Vec::new();
        for item in &self.nav {
            item.collect_links(&mut vec!["nav"], &mut links);
        }
        links
    }

    /// All sidebar links, depth-first in authored order.
    pub fn sidebar_links(&self) -> Vec<LinkRef<'_>> {
        let mut links = Vec::new();
        for section in &self.sidebar {
            section.collect_links(&mut vec!["sidebar"], &mut links);
        }
        links
    }
}

/// Search provider selection.
///
/// ```toml
/// [theme.search]
/// provider = "external"
/// options = { app_id = "...", index_name = "docs" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchProvider {
    /// Built-in client-side search
    #[default]
    Local,

    /// Hosted search service; options are passed through verbatim
    External {
        #[serde(default)]
        options: BTreeMap<String, String>,
    },
}

/// A social icon link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
}

/// Footer navigation labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLabels {
    #[serde(default = "default_prev")]
    pub prev: String,
    #[serde(default = "default_next")]
    pub next: String,
}

fn default_prev() -> String {
    "Previous page".to_string()
}

fn default_next() -> String {
    "Next page".to_string()
}

impl Default for FooterLabels {
    fn default() -> Self {
        Self {
            prev: default_prev(),
            next: default_next(),
        }
    }
}

/// Last-updated timestamp display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastUpdated {
    /// Text shown before the timestamp
    #[serde(default = "default_last_updated_label")]
    pub label: String,

    #[serde(default = "default_date_style")]
    pub date_style: TimeStyle,

    #[serde(default = "default_time_style")]
    pub time_style: TimeStyle,
}

fn default_last_updated_label() -> String {
    "Last updated".to_string()
}

fn default_date_style() -> TimeStyle {
    TimeStyle::Short
}

fn default_time_style() -> TimeStyle {
    TimeStyle::Medium
}

impl Default for LastUpdated {
    fn default() -> Self {
        Self {
            label: default_last_updated_label(),
            date_style: default_date_style(),
            time_style: default_time_style(),
        }
    }
}

/// Date/time formatting verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    Full,
    Long,
    Medium,
    Short,
}
