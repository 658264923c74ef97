use log::debug;
use startpage_core::{BuildContext, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Join theme, font and base stylesheet source, in that order.
///
/// Theme and font come first so the base stylesheet can use the variables
/// and mixins they define.
pub fn merge_sources(theme: &str, font: &str, base: &str) -> String {
    format!("{}\n{}\n{}", theme, font, base)
}

/// Compile SCSS source into compressed CSS.
///
/// `load_paths` are searched in order for `@use`/`@import` targets.
#[cfg(feature = "scss")]
pub fn compile(source: &str, load_paths: &[PathBuf]) -> Result<String> {
    let options = grass::Options::default()
        .style(grass::OutputStyle::Compressed)
        .load_paths(load_paths);

    grass::from_string(source.to_owned(), &options)
        .map_err(|e| Error::StylesheetCompile(e.to_string()))
}

#[cfg(not(feature = "scss"))]
pub fn compile(_source: &str, _load_paths: &[PathBuf]) -> Result<String> {
    Err(Error::StylesheetCompilerUnavailable)
}

/// Whether this build can compile stylesheets.
pub fn compiler_available() -> bool {
    cfg!(feature = "scss") && compile("a{b:c}", &[]).is_ok_and(|css| !css.is_empty())
}

/// Read the theme, font and base stylesheet of a build and compile them.
pub fn compile_for(ctx: &BuildContext) -> Result<String> {
    let base_path = ctx.layout.base_stylesheet();
    let source = merge_sources(
        &read(&ctx.theme.stylesheet)?,
        &read(&ctx.font.stylesheet)?,
        &read(&base_path)?,
    );

    let load_paths = vec![
        ctx.theme.dir.clone(),
        ctx.font.dir.clone(),
        ctx.layout.sources_dir(),
    ];

    let css = compile(&source, &load_paths)?;
    debug!(
        "Compiled {} bytes of stylesheet source into {} bytes of CSS",
        source.len(),
        css.len()
    );
    Ok(css)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(all(test, feature = "scss"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_merge_order() {
        assert_eq!(merge_sources("t", "f", "b"), "t\nf\nb");
    }

    #[test]
    fn test_compile_is_compressed() {
        let css = compile("a {\n  color: red;\n}\n", &[]).unwrap();
        assert_eq!(css.trim(), "a{color:red}");
    }

    #[test]
    fn test_base_sees_theme_and_font_variables() {
        let source = merge_sources(
            "$background: #123456;",
            "$family: monospace;",
            "body { background: $background; font-family: $family; }",
        );
        let css = compile(&source, &[]).unwrap();
        assert!(css.contains("background:#123456"));
        assert!(css.contains("font-family:monospace"));
    }

    #[test]
    fn test_compile_error_is_reported() {
        let err = compile("a { color: $undefined; }", &[]).unwrap_err();
        match err {
            Error::StylesheetCompile(ref message) => {
                assert!(message.contains("Undefined variable"))
            }
            other => panic!("expected StylesheetCompile, got {:?}", other),
        }
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().starts_with("Failed to compile your theme/font:"));
    }

    #[test]
    fn test_imports_resolve_from_load_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_palette.scss"), "$accent: #ff6b35;").unwrap();

        let css = compile(
            "@import 'palette';\na { color: $accent; }",
            &[dir.path().to_path_buf()],
        )
        .unwrap();
        assert!(css.contains("color:#ff6b35"));
    }

    #[test]
    fn test_compiler_available() {
        assert!(compiler_available());
    }
}
