use crate::layout::ProjectLayout;
use std::path::PathBuf;

/// Complete start page configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub look: Look,
    pub page: Page,
    pub search: Search,
    pub sections: Vec<Section>,
}

/// Visual settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Look {
    pub theme: String,
    pub font: String,
    pub image: PathBuf,
    /// Welcome message shown next to the image
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub lang: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub placeholder: String,
}

/// Named group of links, kept in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub icon: String,
    pub url: String,
}

/// A theme or font: its name, directory and the stylesheet inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAsset {
    pub name: String,
    pub dir: PathBuf,
    pub stylesheet: PathBuf,
}

/// How user-supplied text is embedded into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// HTML-escape names, URLs and messages
    #[default]
    Html,
    /// Embed configuration text verbatim; the config author is trusted
    Trusted,
}

/// Everything a build needs, validated and resolved up front.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub layout: ProjectLayout,
    pub config: Config,
    pub theme: StyleAsset,
    pub font: StyleAsset,
    /// Image path resolved against the project root
    pub image: PathBuf,
    pub escaping: Escaping,
}
