// Page generation: stylesheet, sections, inlined image, template

pub mod escape;
pub mod image;
pub mod sections;
pub mod stylesheet;
pub mod template;

use log::{info, warn};
use startpage_core::{BuildContext, Error, Result};
use std::fs;
use std::path::PathBuf;
use template::{Replacements, missing_placeholders};

pub struct GeneratedPage {
    pub path: PathBuf,
    pub html: String,
}

/// Run every generation step for a validated build context.
pub fn generate_page(ctx: &BuildContext) -> Result<GeneratedPage> {
    let styles = stylesheet::compile_for(ctx)?;

    info!("Generating sections...");
    let sections_html = sections::render_sections(&ctx.config.sections, ctx.escaping);
    info!("\tSections generated.");

    info!("Converting image...");
    let image = image::image_to_data_url(&ctx.image)?;
    info!("\tImage converted.");

    let template_path = ctx.layout.template();
    let template =
        fs::read_to_string(&template_path).map_err(|e| Error::io(&template_path, e))?;
    for placeholder in missing_placeholders(&template) {
        warn!(
            "Template {} has no {} placeholder",
            template_path.display(),
            placeholder.token()
        );
    }

    let text = |s: &str| escape::apply(ctx.escaping, s).into_owned();
    let replacements = Replacements {
        lang: text(&ctx.config.page.lang),
        styles,
        title: text(&ctx.config.page.title),
        image,
        message: text(&ctx.config.look.message),
        sections: sections_html,
        search_placeholder: text(&ctx.config.search.placeholder),
    };

    Ok(GeneratedPage {
        path: ctx.layout.output_file(),
        html: template::compose(&template, &replacements),
    })
}

/// Write a generated page, creating its directory if needed.
///
/// Any previous output at the same path is overwritten.
pub fn write_page(page: &GeneratedPage) -> Result<()> {
    if let Some(dir) = page.path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::write(&page.path, &page.html).map_err(|e| Error::io(&page.path, e))
}
