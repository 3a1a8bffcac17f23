//! Typed site configuration descriptor for documentation sites.
//!
//! The descriptor is plain data: site metadata, top navigation, sidebar tree,
//! search provider, social links, footer labels and last-updated display.
//! It is loaded once from `vellum.toml` (or JSON/YAML) and handed to the
//! external site generator unchanged.

pub mod descriptor;
pub mod loader;
pub mod nav;
pub mod theme;

pub use descriptor::{is_external, SiteDescriptor};
pub use loader::{find_config, load, save, ConfigError, Format, CONFIG_FILE_NAMES};
pub use nav::{
    breadcrumb, LinkRef, NavItem, NavLink, NavMenu, ResolvedNavItem, ResolvedSidebarEntry,
    SidebarEntry, SidebarLink, SidebarSection,
};
pub use theme::{FooterLabels, LastUpdated, SearchProvider, SocialLink, ThemeConfig, TimeStyle};
