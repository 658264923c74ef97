use log::debug;
use startpage_core::{Error, Result, config};
use startpage_generator::stylesheet;

/// Confirm the YAML parser and the stylesheet compiler are usable.
///
/// Runs before any project file is touched. YAML is checked first.
pub fn check_capabilities() -> Result<()> {
    check(config::yaml_available(), stylesheet::compiler_available())
}

fn check(yaml: bool, scss: bool) -> Result<()> {
    debug!("Capabilities: yaml={}, scss={}", yaml, scss);
    if !yaml {
        return Err(Error::YamlUnavailable);
    }
    if !scss {
        return Err(Error::StylesheetCompilerUnavailable);
    }
    Ok(())
}
