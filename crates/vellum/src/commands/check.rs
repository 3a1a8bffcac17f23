//! Config check command.

use std::path::PathBuf;

use anyhow::Result;
use vellum_check::Severity;

/// Run the check command.
pub async fn run(config: Option<PathBuf>) -> Result<()> {
    let loaded = super::load(config.as_deref())?;

    let report = vellum_check::check(&loaded.site, &loaded.root)?;

    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Error => tracing::error!("{}: {}", diagnostic.location, diagnostic.message),
            Severity::Warning => tracing::warn!("{}: {}", diagnostic.location, diagnostic.message),
        }
    }

    if report.has_errors() {
        anyhow::bail!(
            "{} found {} error(s) and {} warning(s)",
            loaded.path.display(),
            report.error_count(),
            report.warning_count()
        );
    }

    tracing::info!(
        "{} is valid ({} warning(s))",
        loaded.path.display(),
        report.warning_count()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_site(root: &std::path::Path, config: &str) -> PathBuf {
        let docs = root.join("docs");
        fs::create_dir_all(docs.join("xm")).unwrap();
        fs::write(docs.join("index.md"), "# 首页").unwrap();
        fs::write(docs.join("xm/lesson-1.md"), "# 第一课").unwrap();

        let path = root.join("vellum.toml");
        fs::write(&path, config).unwrap();
        path
    }

    #[tokio::test]
    async fn passes_when_every_link_resolves() {
        let temp = tempdir().unwrap();
        let path = write_site(
            temp.path(),
            r#"
title = "oyyDocs"
base = "/oyyDocs/"
src_dir = "docs"

[[theme.nav]]
label = "首页"
link = "index.md"

[[theme.sidebar]]
label = "xm学堂"
collapsed = true
items = [{ label = "第一课", link = "xm/lesson-1" }]
"#,
        );

        run(Some(path)).await.unwrap();
    }

    #[tokio::test]
    async fn fails_on_dangling_link() {
        let temp = tempdir().unwrap();
        let path = write_site(
            temp.path(),
            r#"
title = "oyyDocs"
src_dir = "docs"

[[theme.sidebar]]
label = "xm学堂"
items = [
  { label = "第一课", link = "xm/lesson-1" },
  { label = "第二课", link = "xm/lesson-2" },
]
"#,
        );

        let err = run(Some(path)).await.unwrap_err();

        assert!(err.to_string().contains("1 error(s) and 0 warning(s)"));
    }

    #[tokio::test]
    async fn warnings_alone_do_not_fail() {
        let temp = tempdir().unwrap();
        let path = write_site(
            temp.path(),
            r#"
title = ""
base = "oyyDocs"
src_dir = "docs"

[[theme.nav]]
label = "首页"
link = "index.md"
"#,
        );

        run(Some(path)).await.unwrap();
    }

    #[tokio::test]
    async fn missing_source_dir_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vellum.toml");
        fs::write(&path, "title = \"Docs\"\nsrc_dir = \"nowhere\"\n").unwrap();

        assert!(run(Some(path)).await.is_err());
    }
}
