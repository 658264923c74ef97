use anyhow::Result;
use log::info;
use startpage_core::{Escaping, ProjectLayout};
use startpage_generator::stylesheet;
use startpage_validator::{check_capabilities, validate_project};
use std::path::PathBuf;

pub fn run(path: PathBuf) -> Result<()> {
    info!("Validating project at: {}", path.display());

    check_capabilities()?;
    let layout = ProjectLayout::new(path);
    let ctx = validate_project(&layout, Escaping::default())?;
    let css = stylesheet::compile_for(&ctx)?;

    let links: usize = ctx.config.sections.iter().map(|s| s.links.len()).sum();
    info!("✓ config.yaml valid");
    info!("  Page: {} ({})", ctx.config.page.title, ctx.config.page.lang);
    info!(
        "  Sections: {} with {} links",
        ctx.config.sections.len(),
        links
    );
    info!("✓ Stylesheet compiled ({} bytes)", css.len());

    Ok(())
}
