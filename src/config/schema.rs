use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub links: LinksConfig,
    pub safety: SafetyConfig,
    pub classes: ClassesConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentConfig {
    pub strip_frontmatter: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    pub class: String,
    /// Open links in a new tab with `rel="noopener noreferrer"`.
    pub new_tab: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SafetyConfig {
    pub escape_html: bool,
    pub allowed_schemes: Vec<String>,
}

/// CSS classes per element. Empty means no `class` attribute.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClassesConfig {
    pub heading2: String,
    pub heading3: String,
    pub rule: String,
    pub unordered_list: String,
    pub ordered_list: String,
    pub list_item: String,
    pub paragraph: String,
}
