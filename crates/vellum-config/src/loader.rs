//! Reading and writing the descriptor on disk.
//!
//! TOML is the native format; JSON and YAML are accepted by extension.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::SiteDescriptor;

/// File names tried by [`find_config`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["vellum.toml", "vellum.json", "vellum.yaml", "vellum.yml"];

/// On-disk serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension. Paths without an extension are TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            None | Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

/// Errors that can occur when loading or saving a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Failed to serialize config as {format}: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported config format: .{0}")]
    UnsupportedFormat(String),

    #[error("No config file found in {0}")]
    NotFound(PathBuf),
}

impl ConfigError {
    fn parse(format: Format, err: impl std::fmt::Display) -> Self {
        ConfigError::Parse {
            format: format.name(),
            message: err.to_string(),
        }
    }

    fn serialize(format: Format, err: impl std::fmt::Display) -> Self {
        ConfigError::Serialize {
            format: format.name(),
            message: err.to_string(),
        }
    }
}

/// Parse a descriptor from a string in the given format.
pub fn from_str(source: &str, format: Format) -> Result<SiteDescriptor, ConfigError> {
    match format {
        Format::Toml => toml::from_str(source).map_err(|e| ConfigError::parse(format, e)),
        Format::Json => serde_json::from_str(source).map_err(|e| ConfigError::parse(format, e)),
        Format::Yaml => serde_yaml::from_str(source).map_err(|e| ConfigError::parse(format, e)),
    }
}

/// Serialize a descriptor in the given format.
pub fn to_string(site: &SiteDescriptor, format: Format) -> Result<String, ConfigError> {
    match format {
        Format::Toml => toml::to_string_pretty(site).map_err(|e| ConfigError::serialize(format, e)),
        Format::Json => {
            serde_json::to_string_pretty(site).map_err(|e| ConfigError::serialize(format, e))
        }
        Format::Yaml => serde_yaml::to_string(site).map_err(|e| ConfigError::serialize(format, e)),
    }
}

/// Load a descriptor from a file, choosing the format by extension.
pub fn load(path: &Path) -> Result<SiteDescriptor, ConfigError> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let site = from_str(&content, format)?;
    tracing::info!("Loaded config from {}", path.display());
    tracing::debug!(
        "{} nav items, {} sidebar sections",
        site.theme.nav.len(),
        site.theme.sidebar.len()
    );

    Ok(site)
}

/// Write a descriptor to a file, choosing the format by extension.
pub fn save(site: &SiteDescriptor, path: &Path) -> Result<(), ConfigError> {
    let format = Format::from_path(path)?;
    let content = to_string(site, format)?;

    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote config to {}", path.display());

    Ok(())
}

/// Find the first known config file in a directory.
pub fn find_config(dir: &Path) -> Result<PathBuf, ConfigError> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavItem, SidebarEntry, SidebarSection};
    use crate::theme::{SearchProvider, SocialLink, TimeStyle};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const OYY_DOCS: &str = r#"
title = "oyyDocs"
description = "个人学习笔记"
out_dir = "dist"
base = "/oyyDocs/"
src_dir = "docs"

[theme]
search = { provider = "local" }
social = [{ icon = "github", url = "https://github.com/oyy/oyyDocs" }]
footer = { prev = "上一页", next = "下一页" }
last_updated = { label = "最后更新于", date_style = "full", time_style = "medium" }

[[theme.nav]]
label = "首页"
link = "index.md"

[[theme.nav]]
label = "笔记"
items = [
  { label = "前端", link = "frontend/" },
  { label = "后端", link = "backend/index.md" },
]

[[theme.sidebar]]
label = "xm学堂"
collapsed = true
items = [
  { label = "第一课", link = "xm/lesson-1" },
  { label = "第二课", link = "xm/lesson-2.md" },
]

[[theme.sidebar]]
label = "前端"
items = [
  { label = "Vue", items = [{ label = "响应式", link = "frontend/vue/reactivity" }] },
]
"#;

    fn sample() -> SiteDescriptor {
        from_str(OYY_DOCS, Format::Toml).unwrap()
    }

    #[test]
    fn parses_full_descriptor() {
        let site = sample();

        assert_eq!(site.title, "oyyDocs");
        assert_eq!(site.base, "/oyyDocs/");
        assert_eq!(site.src_dir, Some(PathBuf::from("docs")));
        assert_eq!(site.theme.search, SearchProvider::Local);
        assert_eq!(
            site.theme.social,
            vec![SocialLink {
                icon: "github".to_string(),
                url: "https://github.com/oyy/oyyDocs".to_string(),
            }]
        );
        assert_eq!(site.theme.footer.next, "下一页");
        assert_eq!(site.theme.last_updated.date_style, TimeStyle::Full);
        assert_eq!(site.theme.nav[0], NavItem::link("首页", "index.md"));
        assert_eq!(
            site.theme.sidebar[0],
            SidebarSection::new(
                "xm学堂",
                true,
                vec![
                    SidebarEntry::link("第一课", "xm/lesson-1"),
                    SidebarEntry::link("第二课", "xm/lesson-2.md"),
                ]
            )
        );
        assert!(!site.theme.sidebar[1].collapsed);
    }

    #[test]
    fn minimal_descriptor_fills_defaults() {
        let site = from_str("title = \"Docs\"", Format::Toml).unwrap();

        assert_eq!(site, SiteDescriptor::new("Docs"));
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let result = from_str("base = \"/\"", Format::Toml);

        assert!(matches!(result, Err(ConfigError::Parse { format: "toml", .. })));
    }

    #[test]
    fn round_trips_in_every_format() {
        let site = sample();

        for format in [Format::Toml, Format::Json, Format::Yaml] {
            let text = to_string(&site, format).unwrap();
            let reloaded = from_str(&text, format).unwrap();
            assert_eq!(reloaded, site, "round trip through {}", format.name());
        }
    }

    #[test]
    fn saves_and_loads_by_extension() {
        let temp = tempdir().unwrap();
        let site = sample();

        for name in ["site.toml", "site.json", "site.yml"] {
            let path = temp.path().join(name);
            save(&site, &path).unwrap();
            assert_eq!(load(&path).unwrap(), site);
        }
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = Format::from_path(Path::new("site.ini"));

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"));
    }

    #[test]
    fn finds_config_by_priority() {
        let temp = tempdir().unwrap();

        assert!(matches!(
            find_config(temp.path()),
            Err(ConfigError::NotFound(_))
        ));

        fs::write(temp.path().join("vellum.yaml"), "title: Docs\n").unwrap();
        fs::write(temp.path().join("vellum.toml"), "title = \"Docs\"\n").unwrap();

        assert_eq!(find_config(temp.path()).unwrap(), temp.path().join("vellum.toml"));
    }

    #[test]
    fn reports_missing_file() {
        let temp = tempdir().unwrap();

        let result = load(&temp.path().join("vellum.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
