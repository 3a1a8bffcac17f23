//! Initialize a documentation site descriptor in a project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Run the init command.
pub async fn run(config: Option<PathBuf>, yes: bool) -> Result<()> {
    tracing::info!("Initializing vellum...");

    let config_path = config.unwrap_or_else(|| PathBuf::from("vellum.toml"));
    let root = super::config_root(&config_path);

    if !scaffold(&root, &config_path, yes).await? {
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'vellum check' to verify every link resolves.");

    Ok(())
}

/// Write the config file and sample docs. Returns false if nothing was written.
pub async fn scaffold(root: &Path, config_path: &Path, yes: bool) -> Result<bool> {
    if fs::try_exists(config_path).await.unwrap_or(false) && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(false);
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let guide_dir = root.join("docs").join("guide");
    fs::create_dir_all(&guide_dir)
        .await
        .context("Failed to create docs directory")?;

    let pages = [
        (root.join("docs").join("index.md"), DEFAULT_INDEX),
        (guide_dir.join("getting-started.md"), DEFAULT_GETTING_STARTED),
        (guide_dir.join("configuration.md"), DEFAULT_CONFIGURATION),
    ];

    for (path, content) in pages {
        if fs::try_exists(&path).await.unwrap_or(false) && !yes {
            continue;
        }
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# Vellum site descriptor

# Site title and description
title = "My Documentation"
description = "Project documentation"

# Output directory for the generated site
out_dir = "dist"

# URL prefix the site is served under
base = "/"

# Markdown sources, relative to this file
src_dir = "docs"

[theme]
search = { provider = "local" }
social = [{ icon = "github", url = "https://github.com/" }]
footer = { prev = "Previous page", next = "Next page" }
last_updated = { label = "Last updated", date_style = "short", time_style = "medium" }

[[theme.nav]]
label = "Home"
link = "index.md"

[[theme.nav]]
label = "Guide"
items = [
  { label = "Getting Started", link = "guide/getting-started" },
  { label = "Configuration", link = "guide/configuration.md" },
]

[[theme.sidebar]]
label = "Guide"
collapsed = false
items = [
  { label = "Getting Started", link = "guide/getting-started" },
  { label = "Configuration", link = "guide/configuration.md" },
]
"#;

const DEFAULT_INDEX: &str = r#"# Welcome

This is your documentation site.

Start with the [Getting Started](./guide/getting-started.md) guide.
"#;

const DEFAULT_GETTING_STARTED: &str = r#"# Getting Started

Navigation and sidebar entries live in `vellum.toml`. Each `link` is a path
under `docs/`, with or without the `.md` extension.

```bash
vellum check   # every link must resolve to a document
vellum nav     # print the menus with their final URLs
vellum export  # write dist/vellum.json for the site generator
```
"#;

const DEFAULT_CONFIGURATION: &str = r#"# Configuration

| Key        | Meaning                                   |
|------------|-------------------------------------------|
| `title`    | Site title                                |
| `base`     | URL prefix the site is served under       |
| `out_dir`  | Where the generator writes the site       |
| `src_dir`  | Where the markdown sources live           |
| `[theme]`  | Navigation, sidebar, search, footer       |

Sidebar sections nest up to any depth and may start collapsed:

```toml
[[theme.sidebar]]
label = "Guide"
collapsed = true
items = [{ label = "Getting Started", link = "guide/getting-started" }]
```
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn scaffolded_site_checks_clean() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("vellum.toml");

        assert!(scaffold(temp.path(), &config_path, false).await.unwrap());

        let site = vellum_config::load(&config_path).unwrap();
        let report = vellum_check::check(&site, temp.path()).unwrap();

        assert!(report.is_clean(), "unexpected findings: {:?}", report);
        assert_eq!(site.theme.nav.len(), 2);
        assert_eq!(site.theme.sidebar[0].items.len(), 2);
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("vellum.toml");
        std::fs::write(&config_path, "title = \"Mine\"\n").unwrap();

        assert!(!scaffold(temp.path(), &config_path, false).await.unwrap());
        assert_eq!(
            std::fs::read_to_string(&config_path).unwrap(),
            "title = \"Mine\"\n"
        );

        assert!(scaffold(temp.path(), &config_path, true).await.unwrap());
        assert!(std::fs::read_to_string(&config_path)
            .unwrap()
            .contains("My Documentation"));
    }
}
