use anyhow::Result;
use log::info;
use startpage_core::{Escaping, ProjectLayout};
use startpage_generator::{generate_page, write_page};
use startpage_validator::{check_capabilities, validate_project};
use std::path::PathBuf;

/// Build the start page: validate, compile, render and write `index.html`.
pub fn run(path: PathBuf, output: Option<PathBuf>, trusted: bool) -> Result<()> {
    check_capabilities()?;

    let mut layout = ProjectLayout::new(path);
    if let Some(output) = output {
        layout = layout.with_output_dir(output);
    }

    let escaping = if trusted {
        Escaping::Trusted
    } else {
        Escaping::Html
    };

    let ctx = validate_project(&layout, escaping)?;
    let page = generate_page(&ctx)?;
    write_page(&page)?;

    info!("Done!\n\tCompiled to: {}", page.path.display());

    Ok(())
}
