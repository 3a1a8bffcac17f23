//! Export the resolved descriptor for the site generator.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs;
use vellum_config::{
    FooterLabels, LastUpdated, ResolvedNavItem, ResolvedSidebarEntry, SearchProvider,
    SiteDescriptor, SocialLink, TimeStyle,
};

/// JSON exchange document (vellum.json).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub base: String,
    pub out_dir: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<&'a Path>,
    pub theme_config: ExportTheme<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTheme<'a> {
    pub nav: Vec<ResolvedNavItem>,
    pub sidebar: Vec<ResolvedSidebarEntry>,
    pub search: &'a SearchProvider,
    pub social_links: &'a [SocialLink],
    pub footer: &'a FooterLabels,
    pub last_updated: ExportLastUpdated<'a>,
}

/// camelCase view of the last-updated settings; the config file keeps snake_case.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLastUpdated<'a> {
    pub label: &'a str,
    pub date_style: TimeStyle,
    pub time_style: TimeStyle,
}

impl<'a> From<&'a LastUpdated> for ExportLastUpdated<'a> {
    fn from(last_updated: &'a LastUpdated) -> Self {
        Self {
            label: &last_updated.label,
            date_style: last_updated.date_style,
            time_style: last_updated.time_style,
        }
    }
}

impl<'a> ExportDocument<'a> {
    pub fn new(site: &'a SiteDescriptor) -> Self {
        Self {
            title: &site.title,
            description: &site.description,
            base: site.normalized_base(),
            out_dir: &site.out_dir,
            src_dir: site.src_dir.as_deref(),
            theme_config: ExportTheme {
                nav: site.resolve_navigation(),
                sidebar: site.resolve_sidebar(),
                search: &site.theme.search,
                social_links: &site.theme.social,
                footer: &site.theme.footer,
                last_updated: ExportLastUpdated::from(&site.theme.last_updated),
            },
        }
    }
}

/// Run the export command.
pub async fn run(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let loaded = super::load(config.as_deref())?;

    let output =
        output.unwrap_or_else(|| loaded.site.output_dir(&loaded.root).join("vellum.json"));

    let json = serde_json::to_string_pretty(&ExportDocument::new(&loaded.site))
        .context("Failed to serialize export document")?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(&output, json)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Exported {}", output.display());

    Ok(())
}
