use std::path::PathBuf;
use thiserror::Error;

/// Hint appended to every configuration error when it is reported.
pub const CONFIG_HINT: &str =
    "Refer to the documentation for instructions on how to correctly create a config file.";

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "YAML support is not available in this build.\n\
         Install it using one of these methods:\n\n\
         From source:\n\
         cargo install startpage --features yaml\n\n\
         From a checkout:\n\
         cargo build --release --features yaml"
    )]
    YamlUnavailable,

    #[error(
        "The stylesheet compiler is not available in this build.\n\
         Install it using one of these methods:\n\n\
         From source:\n\
         cargo install startpage --features scss\n\n\
         From a checkout:\n\
         cargo build --release --features scss"
    )]
    StylesheetCompilerUnavailable,

    #[error("Could not find source file {} which is required for building.", .path.display())]
    MissingSource { path: PathBuf },

    #[error("Could not find a config file at {} which is required for building.", .path.display())]
    MissingConfig { path: PathBuf },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Key \"{0}\" not found in config.")]
    MissingKey(String),

    #[error("Key \"{key}\" exists, but is not the right type (should be {expected}).")]
    InvalidType { key: String, expected: &'static str },

    #[error("Invalid value for \"{key}\": {reason}")]
    InvalidValue { key: String, reason: String },

    #[error(
        "Theme \"{name}\" doesn't exist!\n\
         Make sure there are no typos in the config file or the theme directory name and that the theme exists at {}.",
        .dir.display()
    )]
    ThemeNotFound { name: String, dir: PathBuf },

    #[error(
        "The directory for the \"{name}\" theme exists, but there is no theme.scss file inside it!\n\
         Make sure there is no typo in the name of the file."
    )]
    ThemeFileMissing { name: String, path: PathBuf },

    #[error(
        "Font \"{name}\" doesn't exist!\n\
         Make sure there are no typos in the config file or the font directory name and that the font exists at {}.",
        .dir.display()
    )]
    FontNotFound { name: String, dir: PathBuf },

    #[error(
        "The directory for the \"{name}\" font exists, but there is no font.scss file inside it!\n\
         Make sure there is no typo in the name of the file."
    )]
    FontFileMissing { name: String, path: PathBuf },

    #[error(
        "The image specified (\"{}\") doesn't exist!\n\
         Make sure there is no typo in the config file or the target image file name.",
        .path.display()
    )]
    ImageNotFound { path: PathBuf },

    #[error("Failed to compile your theme/font:\n{0}")]
    StylesheetCompile(String),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::YamlUnavailable => 1,
            Error::MissingSource { .. } => 2,
            Error::MissingConfig { .. }
            | Error::ConfigParse(_)
            | Error::MissingKey(_)
            | Error::InvalidType { .. }
            | Error::InvalidValue { .. } => 3,
            Error::ThemeNotFound { .. } | Error::ThemeFileMissing { .. } => 4,
            Error::FontNotFound { .. } | Error::FontFileMissing { .. } => 5,
            Error::ImageNotFound { .. } => 6,
            Error::StylesheetCompile(_) => 7,
            Error::StylesheetCompilerUnavailable => 8,
            Error::Io { .. } => 9,
        }
    }

    /// Extra guidance printed after the message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::ConfigParse(_)
            | Error::MissingKey(_)
            | Error::InvalidType { .. }
            | Error::InvalidValue { .. } => Some(CONFIG_HINT),
            _ => None,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        let theme = Error::ThemeNotFound {
            name: "nord".to_string(),
            dir: PathBuf::from("themes/nord"),
        };
        let font = Error::FontNotFound {
            name: "mono".to_string(),
            dir: PathBuf::from("fonts/mono"),
        };
        assert_eq!(theme.exit_code(), 4);
        assert_eq!(font.exit_code(), 5);
        assert_ne!(
            Error::YamlUnavailable.exit_code(),
            Error::StylesheetCompilerUnavailable.exit_code()
        );
    }

    #[test]
    fn test_config_errors_share_status_and_hint() {
        let missing = Error::MissingKey("look/theme".to_string());
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.hint(), Some(CONFIG_HINT));
        assert_eq!(missing.to_string(), "Key \"look/theme\" not found in config.");

        let no_file = Error::MissingConfig {
            path: PathBuf::from("build/config.yaml"),
        };
        assert_eq!(no_file.exit_code(), 3);
        assert!(no_file.hint().is_none());
    }

    #[test]
    fn test_messages_name_expected_paths() {
        let err = Error::MissingSource {
            path: PathBuf::from("build/sources/index.html"),
        };
        assert!(err.to_string().contains("build/sources/index.html"));

        let err = Error::ImageNotFound {
            path: PathBuf::from("images/cat.png"),
        };
        assert!(err.to_string().contains("images/cat.png"));
    }
}
