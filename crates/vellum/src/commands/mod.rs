//! Subcommand implementations.

pub mod check;
pub mod export;
pub mod init;
pub mod nav;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vellum_config::SiteDescriptor;

/// A loaded descriptor together with the directory its paths are relative to.
pub struct Loaded {
    pub site: SiteDescriptor,
    pub path: PathBuf,
    pub root: PathBuf,
}

/// Load the descriptor from `--config`, or find one in the current directory.
pub fn load(config: Option<&Path>) -> Result<Loaded> {
    load_in(config, Path::new("."))
}

/// Load the descriptor from `config`, or find one in `dir`.
pub fn load_in(config: Option<&Path>, dir: &Path) -> Result<Loaded> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => vellum_config::find_config(dir)
            .context("Run 'vellum init' to create a config file")?,
    };

    let site = vellum_config::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let root = config_root(&path);

    Ok(Loaded { site, path, root })
}

/// Directory a config file's relative paths are resolved against.
pub fn config_root(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_config_in_directory() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("vellum.json"), r#"{ "title": "Docs" }"#).unwrap();

        let loaded = load_in(None, temp.path()).unwrap();

        assert_eq!(loaded.site.title, "Docs");
        assert_eq!(loaded.path, temp.path().join("vellum.json"));
        assert_eq!(loaded.root, temp.path());
    }

    #[test]
    fn explicit_config_sets_root() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("docs.toml"), "title = \"Nested\"\n").unwrap();

        let loaded = load_in(Some(nested.join("docs.toml").as_path()), temp.path()).unwrap();

        assert_eq!(loaded.site.title, "Nested");
        assert_eq!(loaded.root, nested);
    }

    #[test]
    fn bare_file_name_roots_at_current_dir() {
        assert_eq!(config_root(Path::new("vellum.toml")), PathBuf::from("."));
        assert_eq!(config_root(Path::new("site/vellum.toml")), PathBuf::from("site"));
    }

    #[test]
    fn missing_config_points_at_init() {
        let temp = tempdir().unwrap();

        let err = load_in(None, temp.path()).err().unwrap();

        assert!(format!("{:#}", err).contains("vellum init"));
    }
}
