use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Block-level elements rendered from an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading2 {
        text: String,
    },
    Heading3 {
        text: String,
    },
    Rule,
    UnorderedList {
        items: Vec<String>,
    },
    OrderedList {
        items: Vec<String>,
    },
    /// Inline-formatted markup. Not escaped unless `safety.escape_html` is set.
    Paragraph {
        html: String,
    },
}

/// Which kind of list is being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl Block {
    /// Build the list block for `kind`.
    pub fn list(kind: ListKind, items: Vec<String>) -> Self {
        match kind {
            ListKind::Unordered => Block::UnorderedList { items },
            ListKind::Ordered => Block::OrderedList { items },
        }
    }

    /// Visible text of this block with all markup removed.
    ///
    /// Paragraph tags are stripped and entities decoded, so the result is
    /// what a reader would see. A rule has no text.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading2 { text } | Block::Heading3 { text } => text.clone(),
            Block::Rule => String::new(),
            Block::UnorderedList { items } | Block::OrderedList { items } => items.join("\n"),
            Block::Paragraph { html } => {
                let stripped = TAG_RE.replace_all(html, "");
                html_escape::decode_html_entities(&stripped).into_owned()
            }
        }
    }
}

/// Join the visible text of every block, one block per line.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|block| !matches!(block, Block::Rule))
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
