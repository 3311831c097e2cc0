//! Splits command text into free-text and tag tokens.
//!
//! A tag is `#` followed by one or more word characters, optionally followed
//! by `:` and either a double-quoted string (at least one character inside)
//! or a run of non-whitespace characters. Tokens are matched left to right
//! and never overlap.

/// A slice of the input classified as free text or as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Tag(&'a str),
}

/// Word characters as understood by the tag syntax.
pub(super) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the longest prefix of `s` whose chars all satisfy `pred`.
pub(super) fn prefix_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(index, _)| index)
}

/// Split `input` into tokens. Concatenating the tokens yields `input` again.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('#') {
        let start = pos + offset;
        match tag_len(&input[start..]) {
            Some(len) => {
                if text_start < start {
                    tokens.push(Token::Text(&input[text_start..start]));
                }
                tokens.push(Token::Tag(&input[start..start + len]));
                pos = start + len;
                text_start = pos;
            }
            // A lone '#' is one byte, so the next search starts right after it.
            None => pos = start + 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }

    tokens
}

/// Remove every tag from `input`, recognized or not, and trim the result.
///
/// Whitespace around removed tags is kept as-is, so `fix #label:bug it`
/// becomes `fix  it`.
pub fn strip_tags(input: &str) -> String {
    let stripped: String = tokenize(input)
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(text) => Some(text),
            Token::Tag(_) => None,
        })
        .collect();
    stripped.trim().to_string()
}

/// Length in bytes of the tag starting at `s` (which begins with `#`),
/// or `None` when the `#` does not open a tag.
fn tag_len(s: &str) -> Option<usize> {
    let name_len = prefix_len(&s[1..], is_word_char);
    if name_len == 0 {
        return None;
    }

    let mut len = 1 + name_len;
    if let Some(rest) = s[len..].strip_prefix(':') {
        let value_len = quoted_len(rest).or_else(|| {
            let bare = prefix_len(rest, |c| !c.is_whitespace());
            (bare > 0).then_some(bare)
        });
        // Without a value the colon stays in the surrounding text.
        if let Some(value_len) = value_len {
            len += 1 + value_len;
        }
    }
    Some(len)
}

/// Length of a `"..."` value at the start of `s`, quotes included.
fn quoted_len(s: &str) -> Option<usize> {
    let inner = s.strip_prefix('"')?;
    let close = inner.find('"')?;
    (close > 0).then_some(close + 2)
}
