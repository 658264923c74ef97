use crate::error::{Error, Result};
use crate::types::*;
use log::debug;
use std::fs;
use std::path::{Component, Path};

/// Key-paths every configuration must define, checked in this order.
pub const REQUIRED_KEYS: &[&str] = &[
    "look",
    "look/theme",
    "look/font",
    "look/image",
    "look/message",
    "page",
    "page/lang",
    "page/title",
    "search",
    "search/placeholder",
    "sections",
];

/// Whether this build can read YAML configuration.
pub fn yaml_available() -> bool {
    cfg!(feature = "yaml") && parse_config_document_probe()
}

/// Parse config.yaml from a file path
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config_str(&content)?;
    debug!(
        "Loaded {} with {} sections",
        path.display(),
        config.sections.len()
    );
    Ok(config)
}

/// Parse config.yaml from a string (useful for testing)
#[cfg(feature = "yaml")]
pub fn parse_config_str(content: &str) -> Result<Config> {
    let root = document::parse(content)?;
    document::check_required_keys(&root)?;

    let theme = document::scalar(&root, "look/theme")?;
    validate_name(&theme, "look/theme")?;
    let font = document::scalar(&root, "look/font")?;
    validate_name(&font, "look/font")?;

    Ok(Config {
        look: Look {
            theme,
            font,
            image: document::scalar(&root, "look/image")?.into(),
            message: document::scalar(&root, "look/message")?,
        },
        page: Page {
            lang: document::scalar(&root, "page/lang")?,
            title: document::scalar(&root, "page/title")?,
        },
        search: Search {
            placeholder: document::scalar(&root, "search/placeholder")?,
        },
        sections: document::sections(&root)?,
    })
}

#[cfg(not(feature = "yaml"))]
pub fn parse_config_str(_content: &str) -> Result<Config> {
    Err(Error::YamlUnavailable)
}

#[cfg(feature = "yaml")]
fn parse_config_document_probe() -> bool {
    document::parse("probe: ok")
        .map(|root| root.get("probe").and_then(|v| v.as_str()) == Some("ok"))
        .unwrap_or(false)
}

#[cfg(not(feature = "yaml"))]
fn parse_config_document_probe() -> bool {
    false
}

/// Check a theme or font name before it is joined onto a directory.
///
/// Rejects empty names, absolute paths and `..` components so a config
/// cannot point the build outside `themes/` or `fonts/`.
fn validate_name(name: &str, key: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidValue {
            key: key.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }

    let path = Path::new(name);
    if path.is_absolute() {
        return Err(Error::InvalidValue {
            key: key.to_string(),
            reason: format!("absolute paths not allowed: '{}'", name),
        });
    }

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(Error::InvalidValue {
            key: key.to_string(),
            reason: format!("parent directory references (..) not allowed: '{}'", name),
        });
    }

    Ok(())
}

#[cfg(feature = "yaml")]
mod document {
    use super::REQUIRED_KEYS;
    use crate::error::{Error, Result};
    use crate::types::{Link, Section};
    use serde_yaml::Value;

    pub(super) fn parse(content: &str) -> Result<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_yaml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    pub(super) fn check_required_keys(root: &Value) -> Result<()> {
        match REQUIRED_KEYS
            .iter()
            .find(|key_path| lookup(root, key_path).is_none())
        {
            Some(missing) => Err(Error::MissingKey(missing.to_string())),
            None => Ok(()),
        }
    }

    fn lookup<'a>(root: &'a Value, key_path: &str) -> Option<&'a Value> {
        key_path
            .split('/')
            .try_fold(root, |node, key| node.get(key))
    }

    pub(super) fn scalar(root: &Value, key_path: &str) -> Result<String> {
        let value = lookup(root, key_path).ok_or_else(|| Error::MissingKey(key_path.to_string()))?;
        as_text(value).ok_or_else(|| Error::InvalidType {
            key: key_path.to_string(),
            expected: "a string",
        })
    }

    /// Render a scalar the way it reads in the document.
    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub(super) fn sections(root: &Value) -> Result<Vec<Section>> {
        let Some(Value::Mapping(sections)) = root.get("sections") else {
            return Err(Error::InvalidType {
                key: "sections".to_string(),
                expected: "a dictionary",
            });
        };

        sections
            .iter()
            .map(|(name, links)| {
                let name = as_text(name).ok_or_else(|| Error::InvalidType {
                    key: "sections".to_string(),
                    expected: "a dictionary with text keys",
                })?;
                let key_path = format!("sections/{}", name);

                let links = match links {
                    Value::Null => Vec::new(),
                    Value::Mapping(links) => links
                        .iter()
                        .map(|(link_name, data)| link(&key_path, link_name, data))
                        .collect::<Result<Vec<_>>>()?,
                    _ => {
                        return Err(Error::InvalidType {
                            key: key_path,
                            expected: "a dictionary",
                        });
                    }
                };

                Ok(Section { name, links })
            })
            .collect()
    }

    fn link(section_path: &str, name: &Value, data: &Value) -> Result<Link> {
        let name = as_text(name).ok_or_else(|| Error::InvalidType {
            key: section_path.to_string(),
            expected: "a dictionary with text keys",
        })?;
        let key_path = format!("{}/{}", section_path, name);

        let field = |key: &str| -> Result<String> {
            let field_path = format!("{}/{}", key_path, key);
            let value = data
                .get(key)
                .ok_or_else(|| Error::MissingKey(field_path.clone()))?;
            as_text(value).ok_or(Error::InvalidType {
                key: field_path,
                expected: "a string",
            })
        };

        Ok(Link {
            icon: field("icon")?,
            url: field("url")?,
            name,
        })
    }
}
