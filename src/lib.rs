mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;

pub use block::{Block, ListKind, to_plain_text};
pub use config::{ClassesConfig, Config, ConfigError, DocumentConfig, LinksConfig, SafetyConfig};
pub use error::Error;
pub use html::blocks_to_html;
pub use inline::{format_inline, strip_bold};

/// Render an article body into blocks using the default config.
pub fn render(markdown: &str) -> Vec<Block> {
    render_with_config(markdown, &Config::compiled_default())
}

/// Render an article body into blocks with custom config.
pub fn render_with_config(markdown: &str, config: &Config) -> Vec<Block> {
    parser::parse(markdown, config)
}

/// Convert markdown to HTML using the default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let blocks = render_with_config(markdown, config);
    html::blocks_to_html(&blocks, config)
}

/// Serialize blocks as pretty-printed JSON.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(blocks)?)
}
