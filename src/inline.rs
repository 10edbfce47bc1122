use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Config;

static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply bold, italic and link formatting to a paragraph line.
///
/// The substitutions run in that order so `**bold**` is never half-consumed
/// by the single-asterisk rule. Unmatched markers are left as literal text.
pub fn format_inline(line: &str, config: &Config) -> String {
    let escape = config.safety.escape_html;
    let text: Cow<'_, str> = if escape {
        html_escape::encode_text(line)
    } else {
        Cow::Borrowed(line)
    };

    let text = STRONG_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = EMPHASIS_RE.replace_all(&text, "<em>${1}</em>");
    let text = LINK_RE.replace_all(&text, |caps: &Captures| {
        let label = &caps[1];
        let url = &caps[2];
        if !config.safety.allows_url(url) {
            tracing::warn!(url, "dropping link with disallowed scheme");
            return label.to_string();
        }
        link_markup(label, url, escape, config)
    });

    text.into_owned()
}

fn link_markup(label: &str, url: &str, escape: bool, config: &Config) -> String {
    let href: Cow<'_, str> = if escape {
        // `& < >` are already encoded at this point
        Cow::Owned(url.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(url)
    };

    let mut out = format!("<a href=\"{href}\"");
    if !config.links.class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&config.links.class));
        out.push('"');
    }
    if config.links.new_tab {
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    out.push('>');
    out.push_str(label);
    out.push_str("</a>");
    out
}

/// Replace `**text**` with `text`. List items carry plain text only.
pub fn strip_bold(text: &str) -> String {
    STRONG_RE.replace_all(text, "${1}").into_owned()
}
