//! Image reference handling for answer markup.
//!
//! Answer fragments reference images relative to the source document; the
//! page serves them under a fixed static-asset root. [`rewrite_image_sources`]
//! corrects each `<img>` source against that root and is idempotent: a
//! source already under the root is left untouched.

use scraper::{Html, Selector};

/// Every `src` of every embedded image in the fragment, in document order.
pub fn image_sources(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };
    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .map(str::to_owned)
        .collect()
}

/// Rewrite every `<img>` source in the fragment against the static-asset root.
///
/// Sources already prefixed with `static_root` are untouched. A source
/// starting with `images/` gets the root prepended; any other source gets
/// the root plus an `images/` segment. Quote style and all other attributes
/// are preserved. Pure and synchronous.
pub fn rewrite_image_sources(html: &str, static_root: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    loop {
        // Find the next <img tag (case-insensitive).
        let start = match lower[pos..].find("<img") {
            Some(offset) => pos + offset,
            None => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        // Verify this is actually an img tag (not e.g. <image>).
        let after_tag = start + 4;
        if after_tag < lower.len() {
            let next_byte = lower.as_bytes()[after_tag];
            if next_byte != b' '
                && next_byte != b'>'
                && next_byte != b'/'
                && next_byte != b'\n'
                && next_byte != b'\r'
                && next_byte != b'\t'
            {
                result.push_str(&html[pos..after_tag]);
                pos = after_tag;
                continue;
            }
        }

        let end = match lower[start..].find('>') {
            Some(offset) => start + offset + 1,
            None => html.len(),
        };

        result.push_str(&html[pos..start]);
        result.push_str(&rewrite_img_tag(&html[start..end], static_root));
        pos = end;
    }

    result
}

/// Rewrite the `src` attribute inside a single `<img ...>` tag.
fn rewrite_img_tag(tag: &str, static_root: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with the original tag.
    let lower = tag.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = lower[search_from..].find("src") {
        let at = search_from + offset;
        // The attribute name must be preceded by whitespace (skips data-src).
        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            search_from = at + 3;
            continue;
        }
        let mut i = at + 3;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            search_from = at + 3;
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let (value_start, value_end) = match bytes[i] {
            quote @ (b'"' | b'\'') => {
                let value_start = i + 1;
                match lower[value_start..].find(quote as char) {
                    Some(offset) => (value_start, value_start + offset),
                    None => break,
                }
            }
            _ => {
                let value_start = i;
                let mut value_end = value_start;
                while value_end < bytes.len()
                    && !bytes[value_end].is_ascii_whitespace()
                    && bytes[value_end] != b'>'
                {
                    value_end += 1;
                }
                // An unquoted value in a self-closing tag: the trailing / is
                // tag syntax, not part of the source.
                if value_end > value_start
                    && bytes[value_end - 1] == b'/'
                    && value_end < bytes.len()
                    && bytes[value_end] == b'>'
                {
                    value_end -= 1;
                }
                (value_start, value_end)
            }
        };

        let source = &tag[value_start..value_end];
        return match rewritten_source(source, static_root) {
            Some(fixed) => format!("{}{}{}", &tag[..value_start], fixed, &tag[value_end..]),
            None => tag.to_owned(),
        };
    }

    tag.to_owned()
}

/// The corrected source, or `None` if the source should stay as-is.
fn rewritten_source(source: &str, static_root: &str) -> Option<String> {
    if source.is_empty() || source.starts_with(static_root) {
        return None;
    }
    if source.starts_with("images/") {
        Some(format!("{static_root}{source}"))
    } else {
        Some(format!("{static_root}images/{source}"))
    }
}
