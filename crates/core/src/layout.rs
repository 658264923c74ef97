use std::path::{Path, PathBuf};

pub const THEME_FILE: &str = "theme.scss";
pub const FONT_FILE: &str = "font.scss";
pub const OUTPUT_FILE: &str = "index.html";

/// Fixed directory layout of a start page project.
///
/// ```text
/// <root>/
/// ├── build/
/// │   ├── config.yaml
/// │   └── sources/
/// │       ├── index.html
/// │       └── style.scss
/// ├── themes/<name>/theme.scss
/// ├── fonts/<name>/font.scss
/// └── dist/index.html        ← generated
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    output_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        let output_dir = root.join("dist");
        Self { root, output_dir }
    }

    /// Write the page somewhere other than `<root>/dist`.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.build_dir().join("sources")
    }

    pub fn template(&self) -> PathBuf {
        self.sources_dir().join("index.html")
    }

    pub fn base_stylesheet(&self) -> PathBuf {
        self.sources_dir().join("style.scss")
    }

    pub fn config_file(&self) -> PathBuf {
        self.build_dir().join("config.yaml")
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.root.join("fonts")
    }

    pub fn theme_dir(&self, name: &str) -> PathBuf {
        self.themes_dir().join(name)
    }

    pub fn font_dir(&self, name: &str) -> PathBuf {
        self.fonts_dir().join(name)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE)
    }

    /// Resolve a configured path: absolute paths are kept, relative ones
    /// are taken from the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
