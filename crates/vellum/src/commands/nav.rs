//! Print the resolved navigation trees.

use std::path::PathBuf;

use anyhow::Result;
use vellum_config::{ResolvedNavItem, ResolvedSidebarEntry, SiteDescriptor};

/// Run the nav command.
pub async fn run(config: Option<PathBuf>) -> Result<()> {
    let loaded = super::load(config.as_deref())?;

    print!("{}", render(&loaded.site));

    Ok(())
}

/// Render both trees as indented text, one entry per line.
///
/// Sections show `▸` when collapsed and `▾` when expanded.
pub fn render(site: &SiteDescriptor) -> String {
    let mut out = String::new();

    out.push_str("nav\n");
    for item in site.resolve_navigation() {
        render_nav(&item, 1, &mut out);
    }

    out.push_str("sidebar\n");
    for section in site.resolve_sidebar() {
        render_sidebar(&section, 1, &mut out);
    }

    out
}

fn render_nav(item: &ResolvedNavItem, depth: usize, out: &mut String) {
    let line = match &item.url {
        Some(url) => format!("{} -> {}", item.label, url),
        None => item.label.clone(),
    };
    push_line(out, depth, &line);

    for child in &item.items {
        render_nav(child, depth + 1, out);
    }
}

fn render_sidebar(entry: &ResolvedSidebarEntry, depth: usize, out: &mut String) {
    let line = match &entry.url {
        Some(url) => format!("{} -> {}", entry.label, url),
        None => {
            let marker = if entry.collapsed.unwrap_or(false) { "▸" } else { "▾" };
            format!("{} {}", marker, entry.label)
        }
    };
    push_line(out, depth, &line);

    for child in &entry.items {
        render_sidebar(child, depth + 1, out);
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(line);
    out.push('\n');
}
