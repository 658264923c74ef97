// Validation logic: capabilities, source files, config, theme/font/image

pub mod capabilities;

pub use capabilities::check_capabilities;

use log::info;
use startpage_core::layout::{FONT_FILE, THEME_FILE};
use startpage_core::{
    BuildContext, Error, Escaping, ProjectLayout, Result, StyleAsset, load_config,
};
use std::path::{Path, PathBuf};

/// Check the page template, base stylesheet and config file exist, in that order.
pub fn check_sources(layout: &ProjectLayout) -> Result<()> {
    for path in [layout.template(), layout.base_stylesheet()] {
        if !path.is_file() {
            return Err(Error::MissingSource { path });
        }
    }

    let config = layout.config_file();
    if !config.is_file() {
        return Err(Error::MissingConfig { path: config });
    }

    Ok(())
}

/// Locate `themes/<name>/theme.scss`.
pub fn resolve_theme(layout: &ProjectLayout, name: &str) -> Result<StyleAsset> {
    let dir = layout.theme_dir(name);
    if !dir.is_dir() {
        return Err(Error::ThemeNotFound {
            name: name.to_string(),
            dir,
        });
    }

    let stylesheet = dir.join(THEME_FILE);
    if !stylesheet.is_file() {
        return Err(Error::ThemeFileMissing {
            name: name.to_string(),
            path: stylesheet,
        });
    }

    Ok(StyleAsset {
        name: name.to_string(),
        dir,
        stylesheet,
    })
}

/// Locate `fonts/<name>/font.scss`.
pub fn resolve_font(layout: &ProjectLayout, name: &str) -> Result<StyleAsset> {
    let dir = layout.font_dir(name);
    if !dir.is_dir() {
        return Err(Error::FontNotFound {
            name: name.to_string(),
            dir,
        });
    }

    let stylesheet = dir.join(FONT_FILE);
    if !stylesheet.is_file() {
        return Err(Error::FontFileMissing {
            name: name.to_string(),
            path: stylesheet,
        });
    }

    Ok(StyleAsset {
        name: name.to_string(),
        dir,
        stylesheet,
    })
}

/// Resolve the configured image against the project root and check it exists.
pub fn resolve_image(layout: &ProjectLayout, image: &Path) -> Result<PathBuf> {
    let path = layout.resolve(image);
    if !path.is_file() {
        return Err(Error::ImageNotFound { path });
    }
    Ok(path)
}

/// Run every validation gate and assemble the build context.
///
/// Gates run in a fixed order and the first failure is returned: source
/// files, configuration keys, theme, font, image.
pub fn validate_project(layout: &ProjectLayout, escaping: Escaping) -> Result<BuildContext> {
    check_sources(layout)?;

    let config = load_config(layout.config_file())?;

    let theme = resolve_theme(layout, &config.look.theme)?;
    info!(
        "Using theme:\n\t{} ({})",
        theme.name,
        theme.stylesheet.display()
    );

    let font = resolve_font(layout, &config.look.font)?;
    info!("Using font:\n\t{} ({})", font.name, font.stylesheet.display());

    let image = resolve_image(layout, &config.look.image)?;
    info!("Using image:\n\t{}", image.display());
    info!("Welcome message:\n\t\"{}\"", config.look.message);

    Ok(BuildContext {
        layout: layout.clone(),
        config,
        theme,
        font,
        image,
        escaping,
    })
}
