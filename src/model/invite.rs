use std::fmt;

use pulldown_cmark::{Parser, html};

/// Instructions shown to the user for clients that cannot be deep-linked.
///
/// Stored as Markdown; identifiers are always wrapped in inline code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteMarkup {
    source: String,
}

impl InviteMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends plain prose, escaping Markdown punctuation, entity references
    /// and list/heading markers at the start of a line.
    pub fn text(mut self, text: &str) -> Self {
        let mut line_start = self.source.is_empty() || self.source.ends_with('\n');
        let mut leading_digits = false;

        for ch in text.chars() {
            let escape = match ch {
                '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '!' | '|' | '~' | '&' => {
                    true
                }
                '-' | '+' | '=' => line_start,
                // `1.` / `1)` open an ordered list.
                '.' | ')' => leading_digits,
                _ => false,
            };
            if escape {
                self.source.push('\\');
            }
            self.source.push(ch);

            leading_digits = ch.is_ascii_digit() && (line_start || leading_digits);
            line_start = ch == '\n' || (line_start && ch == ' ');
        }
        self
    }

    /// Appends an inline code span. The fence is one backtick longer than the
    /// longest backtick run in `code`, so the content can't close it early.
    pub fn code(mut self, code: &str) -> Self {
        let fence = "`".repeat(longest_backtick_run(code) + 1);
        let pad = code.starts_with('`') || code.ends_with('`');
        self.source.push_str(&fence);
        if pad {
            self.source.push(' ');
        }
        self.source.push_str(code);
        if pad {
            self.source.push(' ');
        }
        self.source.push_str(&fence);
        self
    }

    pub fn as_markdown(&self) -> &str {
        &self.source
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.source.len() + 16);
        html::push_html(&mut out, Parser::new(&self.source));
        out
    }
}

impl fmt::Display for InviteMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
