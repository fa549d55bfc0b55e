use std::fmt::Write;

/// One quote block scraped off a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// In the order they appear on the page.
    pub tags: Vec<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// The tags as they are stored in the `tags` column, see [`legacy_list_repr`].
    pub fn tags_legacy_repr(&self) -> String {
        legacy_list_repr(&self.tags)
    }
}

/// Everything a single page yields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub quotes: Vec<Quote>,
    pub has_next_page: bool,
}

/// LEGACY_FORMAT: renders the tags the way a Python `list[str]` prints, e.g. `['a', 'b']`.
///
/// Existing consumers of the CSV parse this column back, so the output has to match
/// byte for byte, quote-style selection and escapes included.
pub fn legacy_list_repr(items: &[String]) -> String {
    let mut out = String::with_capacity(2 + items.iter().map(|s| s.len() + 4).sum::<usize>());
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_legacy_str_repr(&mut out, item);
    }
    out.push(']');
    out
}

fn push_legacy_str_repr(out: &mut String, s: &str) {
    // Single quotes unless that would force escaping and double quotes wouldn't.
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                let _ = if code <= 0xff {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xffff {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Control, separator and format characters get escaped; covers what shows up in scraped text.
fn is_printable(c: char) -> bool {
    !matches!(c,
        '\u{0}'..='\u{1f}'
        | '\u{7f}'..='\u{a0}'
        | '\u{ad}'
        | '\u{1680}'
        | '\u{2000}'..='\u{200f}'
        | '\u{2028}'..='\u{202f}'
        | '\u{205f}'..='\u{2064}'
        | '\u{3000}'
        | '\u{feff}'
    )
}
