//! Navigation bar and sidebar trees.
//!
//! Both trees are recursive and keep their items in authored order; that
//! order is what the generator renders.

use serde::{Deserialize, Serialize};

use crate::descriptor::SiteDescriptor;

/// One entry in the top navigation bar: a link or a dropdown menu.
///
/// ```toml
/// [[theme.nav]]
/// label = "首页"
/// link = "index.md"
///
/// [[theme.nav]]
/// label = "更多"
/// items = [{ label = "关于", link = "about" }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Link(NavLink),
    Menu(NavMenu),
}

/// A navigation entry pointing at a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub link: String,
}

/// A dropdown submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavMenu {
    pub label: String,
    pub items: Vec<NavItem>,
}

impl NavItem {
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        NavItem::Link(NavLink {
            label: label.into(),
            link: link.into(),
        })
    }

    pub fn menu(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        NavItem::Menu(NavMenu {
            label: label.into(),
            items,
        })
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            NavItem::Link(link) => &link.label,
            NavItem::Menu(menu) => &menu.label,
        }
    }

    pub(crate) fn collect_links<'a>(&'a self, trail: &mut Vec<&'a str>, out: &mut Vec<LinkRef<'a>>) {
        match self {
            NavItem::Link(link) => out.push(LinkRef {
                trail: trail.clone(),
                label: &link.label,
                target: &link.link,
            }),
            NavItem::Menu(menu) => {
                trail.push(&menu.label);
                for item in &menu.items {
                    item.collect_links(trail, out);
                }
                trail.pop();
            }
        }
    }

    pub(crate) fn resolve(&self, site: &SiteDescriptor) -> ResolvedNavItem {
        match self {
            NavItem::Link(link) => ResolvedNavItem {
                label: link.label.clone(),
                url: Some(site.resolve_url(&link.link)),
                items: Vec::new(),
            },
            NavItem::Menu(menu) => ResolvedNavItem {
                label: menu.label.clone(),
                url: None,
                items: menu.items.iter().map(|item| item.resolve(site)).collect(),
            },
        }
    }
}

/// A collapsible group in the side navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSection {
    pub label: String,

    /// Whether the section starts collapsed
    #[serde(default)]
    pub collapsed: bool,

    pub items: Vec<SidebarEntry>,
}

/// An item inside a sidebar section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Section(SidebarSection),
    Link(SidebarLink),
}

/// A sidebar link to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarLink {
    pub label: String,
    pub link: String,
}

impl SidebarSection {
    pub fn new(label: impl Into<String>, collapsed: bool, items: Vec<SidebarEntry>) -> Self {
        Self {
            label: label.into(),
            collapsed,
            items,
        }
    }

    pub(crate) fn collect_links<'a>(&'a self, trail: &mut Vec<&'a str>, out: &mut Vec<LinkRef<'a>>) {
        trail.push(&self.label);
        for entry in &self.items {
            match entry {
                SidebarEntry::Section(section) => section.collect_links(trail, out),
                SidebarEntry::Link(link) => out.push(LinkRef {
                    trail: trail.clone(),
                    label: &link.label,
                    target: &link.link,
                }),
            }
        }
        trail.pop();
    }

    pub(crate) fn resolve(&self, site: &SiteDescriptor) -> ResolvedSidebarEntry {
        ResolvedSidebarEntry {
            label: self.label.clone(),
            url: None,
            collapsed: Some(self.collapsed),
            items: self
                .items
                .iter()
                .map(|entry| match entry {
                    SidebarEntry::Section(section) => section.resolve(site),
                    SidebarEntry::Link(link) => ResolvedSidebarEntry {
                        label: link.label.clone(),
                        url: Some(site.resolve_url(&link.link)),
                        collapsed: None,
                        items: Vec::new(),
                    },
                })
                .collect(),
        }
    }
}

impl SidebarEntry {
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        SidebarEntry::Link(SidebarLink {
            label: label.into(),
            link: link.into(),
        })
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            SidebarEntry::Section(section) => &section.label,
            SidebarEntry::Link(link) => &link.label,
        }
    }
}

/// A link found while walking a navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRef<'a> {
    /// Labels of the enclosing tree nodes, outermost first
    pub trail: Vec<&'a str>,
    pub label: &'a str,
    pub target: &'a str,
}

impl LinkRef<'_> {
    /// Breadcrumb such as `sidebar › xm学堂 › 第一课`.
    pub fn location(&self) -> String {
        breadcrumb(&self.trail, self.label)
    }
}

/// Join enclosing labels and an entry label into a breadcrumb.
pub fn breadcrumb<S: AsRef<str>>(trail: &[S], label: &str) -> String {
    let mut out = String::new();
    for part in trail {
        out.push_str(part.as_ref());
        out.push_str(" › ");
    }
    out.push_str(label);
    out
}

/// A navigation item with its URL resolved against the base path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ResolvedNavItem>,
}

/// A sidebar section or link with its URL resolved against the base path.
///
/// Sections carry `collapsed`; links carry `url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSidebarEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ResolvedSidebarEntry>,
}
