use crate::block::Block;
use crate::config::Config;

/// Convert blocks to HTML
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, config, &mut out);
    }
    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    let classes = &config.classes;
    match block {
        Block::Heading2 { text } => emit_text_element("h2", &classes.heading2, text, out),
        Block::Heading3 { text } => emit_text_element("h3", &classes.heading3, text, out),
        Block::Rule => {
            open_tag("hr", &classes.rule, out);
            out.push('\n');
        }
        Block::UnorderedList { items } => emit_list("ul", &classes.unordered_list, items, config, out),
        Block::OrderedList { items } => emit_list("ol", &classes.ordered_list, items, config, out),
        Block::Paragraph { html } => {
            // Paragraph markup is already formatted, insert as-is
            open_tag("p", &classes.paragraph, out);
            out.push_str(html);
            out.push_str("</p>\n");
        }
    }
}

fn emit_list(tag: &str, class: &str, items: &[String], config: &Config, out: &mut String) {
    open_tag(tag, class, out);
    out.push('\n');
    for item in items {
        out.push_str("  ");
        emit_text_element("li", &config.classes.list_item, item, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// An element whose content is plain text and must be escaped.
fn emit_text_element(tag: &str, class: &str, text: &str, out: &mut String) {
    open_tag(tag, class, out);
    out.push_str(&html_escape::encode_text(text));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(class));
        out.push('"');
    }
    out.push('>');
}
