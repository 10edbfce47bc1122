use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, ListKind};
use crate::config::Config;
use crate::inline::{format_inline, strip_bold};

static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").unwrap());

/// Strip YAML frontmatter from the beginning of markdown content
fn strip_frontmatter(markdown: &str) -> &str {
    if !markdown.starts_with("---") {
        return markdown;
    }
    // Find the closing ---
    if let Some(end) = markdown[3..].find("\n---") {
        // Skip past the closing --- and any trailing newline
        let after_frontmatter = &markdown[3 + end + 4..];
        after_frontmatter.trim_start_matches('\n')
    } else {
        markdown
    }
}

/// Render an article body into a list of blocks
pub fn parse(markdown: &str, config: &Config) -> Vec<Block> {
    let markdown = if config.document.strip_frontmatter {
        strip_frontmatter(markdown)
    } else {
        markdown
    };

    let mut blocks = Vec::new();
    let mut state = ParseState::default();
    let mut lines = 0usize;

    for line in markdown.trim().split('\n') {
        lines += 1;
        process_line(line.trim(), config, &mut state, &mut blocks);
    }
    state.flush_list(&mut blocks);

    tracing::debug!(lines, blocks = blocks.len(), "rendered document");
    blocks
}

#[derive(Default)]
struct ParseState {
    list_kind: Option<ListKind>,
    list_items: Vec<String>,
}

impl ParseState {
    /// Close the list being accumulated, if any.
    fn flush_list(&mut self, blocks: &mut Vec<Block>) {
        let kind = self.list_kind.take();
        if self.list_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list_items);
        if let Some(kind) = kind {
            tracing::trace!(?kind, items = items.len(), "flushed list");
            blocks.push(Block::list(kind, items));
        }
    }

    fn push_item(&mut self, kind: ListKind, item: &str, blocks: &mut Vec<Block>) {
        if self.list_kind.is_some_and(|current| current != kind) {
            self.flush_list(blocks);
        }
        self.list_kind = Some(kind);
        self.list_items.push(strip_bold(item));
    }
}

fn process_line(line: &str, config: &Config, state: &mut ParseState, blocks: &mut Vec<Block>) {
    if line.is_empty() {
        state.flush_list(blocks);
        return;
    }

    if let Some(text) = line.strip_prefix("## ") {
        state.flush_list(blocks);
        blocks.push(Block::Heading2 {
            text: text.to_string(),
        });
    } else if let Some(text) = line.strip_prefix("### ") {
        state.flush_list(blocks);
        blocks.push(Block::Heading3 {
            text: text.to_string(),
        });
    } else if line == "---" {
        state.flush_list(blocks);
        blocks.push(Block::Rule);
    } else if let Some(item) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        state.push_item(ListKind::Unordered, item, blocks);
    } else if let Some(marker) = ORDERED_MARKER_RE.find(line) {
        state.push_item(ListKind::Ordered, &line[marker.end()..], blocks);
    } else {
        state.flush_list(blocks);
        blocks.push(Block::Paragraph {
            html: format_inline(line, config),
        });
    }
}
