use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Marker that starts every placeholder token in the page template.
pub const TOKEN_PREFIX: &str = "BUILDER:";

/// Placeholders the page template may contain, written `BUILDER:<KEY>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Lang,
    Styles,
    Title,
    Image,
    Message,
    Sections,
    SearchPlaceholder,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::Lang,
        Placeholder::Styles,
        Placeholder::Title,
        Placeholder::Image,
        Placeholder::Message,
        Placeholder::Sections,
        Placeholder::SearchPlaceholder,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Placeholder::Lang => "LANG",
            Placeholder::Styles => "STYLES",
            Placeholder::Title => "TITLE",
            Placeholder::Image => "IMAGE",
            Placeholder::Message => "MESSAGE",
            Placeholder::Sections => "SECTIONS",
            Placeholder::SearchPlaceholder => "SEARCH_PLACEHOLDER",
        }
    }

    pub fn token(self) -> String {
        format!("{}{}", TOKEN_PREFIX, self.key())
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Computed value for every placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    pub lang: String,
    pub styles: String,
    pub title: String,
    pub image: String,
    pub message: String,
    pub sections: String,
    pub search_placeholder: String,
}

impl Replacements {
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Lang => &self.lang,
            Placeholder::Styles => &self.styles,
            Placeholder::Title => &self.title,
            Placeholder::Image => &self.image,
            Placeholder::Message => &self.message,
            Placeholder::Sections => &self.sections,
            Placeholder::SearchPlaceholder => &self.search_placeholder,
        }
    }
}

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Longest keys first so no key shadows another that shares its prefix
    let mut keys: Vec<&str> = Placeholder::ALL.iter().map(|p| p.key()).collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
    Regex::new(&format!(
        "{}({})",
        regex::escape(TOKEN_PREFIX),
        keys.join("|")
    ))
    .unwrap()
});

/// Replace every placeholder token in `template` with its value.
///
/// Substitution is a single pass over the template: text coming from a
/// value is never scanned again, so a value that itself contains a token
/// is emitted literally.
pub fn compose(template: &str, replacements: &Replacements) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| {
            Placeholder::from_key(&caps[1])
                .map(|p| replacements.get(p).to_owned())
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Placeholders that never occur in `template`.
pub fn missing_placeholders(template: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| !template.contains(&p.token()))
        .collect()
}
