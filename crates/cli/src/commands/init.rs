use anyhow::{Context, Result};
use log::info;
use startpage_core::ProjectLayout;
use startpage_core::layout::{FONT_FILE, THEME_FILE};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_THEME: &str = "default";
const DEFAULT_FONT: &str = "default";
const DEFAULT_IMAGE: &str = "images/logo.png";

const CONFIG_YAML: &str = r#"look:
  theme: default
  font: default
  image: images/logo.png
  message: Welcome back!

page:
  lang: en
  title: Start

search:
  placeholder: Search the web...

sections:
  Daily:
    Mail:
      icon: mail
      url: https://mail.example.com
    Calendar:
      icon: calendar
      url: https://calendar.example.com
  News:
    Front page:
      icon: newspaper
      url: https://news.example.com
  Code:
    Repositories:
      icon: git
      url: https://git.example.com
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="BUILDER:LANG">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>BUILDER:TITLE</title>
  <style>BUILDER:STYLES</style>
</head>
<body>
  <header>
    <img class="logo" src="BUILDER:IMAGE" alt="">
    <h1>BUILDER:MESSAGE</h1>
  </header>
  <form action="https://duckduckgo.com/" method="get">
    <input type="search" name="q" placeholder="BUILDER:SEARCH_PLACEHOLDER" autofocus>
  </form>
  <main>
BUILDER:SECTIONS
  </main>
</body>
</html>
"#;

const STYLE_SCSS: &str = r#"body {
  margin: 0;
  min-height: 100vh;
  background: $background;
  color: $foreground;
  font-family: $font-family;
  display: flex;
  flex-direction: column;
  align-items: center;
}

header {
  display: flex;
  align-items: center;
  gap: 1rem;

  .logo {
    width: 4rem;
    height: 4rem;
  }
}

input[type="search"] {
  width: 30rem;
  padding: 0.5rem;
  border: 1px solid $accent;
  background: transparent;
  color: inherit;
}

main {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
}

.sep {
  border-top: 1px solid rgba($foreground, 0.3);
}

a {
  color: $accent;
  text-decoration: none;
}
"#;

const THEME_SCSS: &str = r#"$background: #2e3440;
$foreground: #eceff4;
$accent: #88c0d0;
"#;

const FONT_SCSS: &str = r#"$font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
"#;

/// 1×1 transparent PNG used as the placeholder image
const LOGO_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Initialize a new start page project.
///
/// Creates the directory if needed and writes a working project:
/// config, page template, base stylesheet, a default theme and font,
/// and a placeholder image.
///
/// # Errors
///
/// Returns an error if `build/config.yaml` already exists or a file
/// cannot be written.
pub fn run(path: PathBuf) -> Result<()> {
    info!("Initializing start page project: {}", path.display());

    let layout = ProjectLayout::new(&path);
    if layout.config_file().exists() {
        anyhow::bail!(
            "{} already exists\nHint: Delete it first or use a different directory",
            layout.config_file().display()
        );
    }

    scaffold(&layout)?;

    info!("Initialization complete!");
    info!("Next steps:");
    info!("  1. Edit build/config.yaml (title, message, sections)");
    info!("  2. Build: startpage build {}", path.display());

    Ok(())
}

fn scaffold(layout: &ProjectLayout) -> Result<()> {
    let files: [(PathBuf, &[u8]); 6] = [
        (layout.config_file(), CONFIG_YAML.as_bytes()),
        (layout.template(), INDEX_HTML.as_bytes()),
        (layout.base_stylesheet(), STYLE_SCSS.as_bytes()),
        (
            layout.theme_dir(DEFAULT_THEME).join(THEME_FILE),
            THEME_SCSS.as_bytes(),
        ),
        (
            layout.font_dir(DEFAULT_FONT).join(FONT_FILE),
            FONT_SCSS.as_bytes(),
        ),
        (layout.root().join(DEFAULT_IMAGE), LOGO_PNG),
    ];

    for (path, content) in &files {
        write_file(path, content)?;
    }

    Ok(())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("  ✓ {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use startpage_core::Escaping;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_valid_project() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("home");
        run(root.clone()).unwrap();

        let ctx = startpage_validator::validate_project(&ProjectLayout::new(&root), Escaping::Html)
            .unwrap();
        assert_eq!(ctx.theme.name, DEFAULT_THEME);
        assert_eq!(ctx.font.name, DEFAULT_FONT);
        assert_eq!(ctx.config.sections.len(), 3);
        assert_eq!(fs::read(root.join(DEFAULT_IMAGE)).unwrap(), LOGO_PNG);
    }

    #[test]
    fn test_init_template_has_every_placeholder() {
        assert!(startpage_generator::template::missing_placeholders(INDEX_HTML).is_empty());
    }

    #[test]
    fn test_init_refuses_to_overwrite_config() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(layout.build_dir()).unwrap();
        fs::write(layout.config_file(), "custom: true\n").unwrap();

        let err = run(dir.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(layout.config_file()).unwrap(),
            "custom: true\n"
        );
    }
}
