//! Shape and referential-integrity rules.

use std::path::Path;

use vellum_config::{
    breadcrumb, is_external, NavItem, SidebarEntry, SidebarSection, SiteDescriptor,
};

use crate::index::{CheckError, DocumentIndex};
use crate::report::{Diagnostic, Report};

/// Run every check against a descriptor whose config file lives in `config_dir`.
pub fn check(site: &SiteDescriptor, config_dir: &Path) -> Result<Report, CheckError> {
    let source_dir = site.source_dir(config_dir);
    let output_dir = site.output_dir(config_dir);

    let index = DocumentIndex::scan(&source_dir, &[output_dir])?;
    tracing::info!(
        "Checking links against {} documents in {}",
        index.len(),
        source_dir.display()
    );

    let mut report = check_shape(site);
    report.extend(check_links(site, &index));

    Ok(report)
}

/// Structural checks that need no filesystem access.
pub fn check_shape(site: &SiteDescriptor) -> Report {
    let mut report = Report::new();

    if site.title.trim().is_empty() {
        report.push(Diagnostic::warning("title", "site title is empty"));
    }

    if !site.base.starts_with('/') {
        report.push(Diagnostic::warning(
            "base",
            format!("base path `{}` should start with `/`", site.base),
        ));
    }

    let mut trail = vec!["nav".to_string()];
    for item in &site.theme.nav {
        shape_nav_item(item, &mut trail, &mut report);
    }

    let mut trail = vec!["sidebar".to_string()];
    for section in &site.theme.sidebar {
        shape_section(section, &mut trail, &mut report);
    }

    for social in &site.theme.social {
        if social.url.trim().is_empty() {
            report.push(Diagnostic::error(
                breadcrumb(&["social"][..], &social.icon),
                "social link url is empty",
            ));
        }
    }

    report
}

/// Report every internal link target that does not resolve to a document.
///
/// Empty targets are left to [`check_shape`]; external links are skipped.
pub fn check_links(site: &SiteDescriptor, index: &DocumentIndex) -> Report {
    let mut report = Report::new();

    let links = site
        .theme
        .nav_links()
        .into_iter()
        .chain(site.theme.sidebar_links());

    for link in links {
        let target = link.target.trim();
        if target.is_empty() || is_external(target) {
            continue;
        }

        if index.resolve(target).is_none() {
            report.push(Diagnostic::error(
                link.location(),
                format!("`{}` does not resolve to a document", target),
            ));
        }
    }

    report
}

fn shape_nav_item(item: &NavItem, trail: &mut Vec<String>, report: &mut Report) {
    let location = breadcrumb(&trail[..], item.label());

    match item {
        NavItem::Link(link) => {
            if link.link.trim().is_empty() {
                report.push(Diagnostic::error(location, "link target is empty"));
            }
        }
        NavItem::Menu(menu) => {
            if menu.items.is_empty() {
                report.push(Diagnostic::error(location, "menu has no items"));
            }

            trail.push(menu.label.clone());
            for child in &menu.items {
                shape_nav_item(child, trail, report);
            }
            trail.pop();
        }
    }
}

fn shape_section(section: &SidebarSection, trail: &mut Vec<String>, report: &mut Report) {
    if section.items.is_empty() {
        report.push(Diagnostic::error(
            breadcrumb(&trail[..], &section.label),
            "section has no items",
        ));
    }

    trail.push(section.label.clone());
    for entry in &section.items {
        match entry {
            SidebarEntry::Section(child) => shape_section(child, trail, report),
            SidebarEntry::Link(link) => {
                if link.link.trim().is_empty() {
                    report.push(Diagnostic::error(
                        breadcrumb(&trail[..], entry.label()),
                        "link target is empty",
                    ));
                }
            }
        }
    }
    trail.pop();
}
