//! Inline command parser.
//!
//! Turns text such as `#repo:acme/widgets #label:bug Crash on startup` into a
//! [`ParsedCommand`]. Parsing never fails: fields whose tag is missing are
//! left empty.
//!
//! Field extraction and title cleanup are two independent passes. Extraction
//! looks at every `#` in the raw input and keeps the first `#key:value` per
//! recognized key. The title is the input with every tag removed, including
//! unknown tags and bare `#key` tags that carry no value.

mod tokenizer;

use serde::{Deserialize, Serialize};

use tokenizer::{is_word_char, prefix_len, strip_tags};

/// Structured result of parsing a command string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub repo: String,
    pub label: String,
    pub assignee: String,
    /// Matched later against open milestone titles, case-insensitively.
    pub status: String,
    pub title: String,
}

/// Recognized tag fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Repo,
    Label,
    Assignee,
    Status,
}

impl Field {
    const ALL: [Field; 4] = [Field::Repo, Field::Label, Field::Assignee, Field::Status];

    /// Tag keys that populate this field.
    fn keys(self) -> &'static [&'static str] {
        match self {
            Field::Repo => &["repo"],
            Field::Label => &["label", "type"],
            Field::Assignee => &["assignee"],
            Field::Status => &["status"],
        }
    }

    /// Whether `c` may appear in this field's value.
    /// Only repository slugs accept `/`.
    fn accepts(self, c: char) -> bool {
        is_word_char(c) || matches!(c, '-' | '.') || (self == Field::Repo && c == '/')
    }

    fn slot(self, parsed: &mut ParsedCommand) -> &mut String {
        match self {
            Field::Repo => &mut parsed.repo,
            Field::Label => &mut parsed.label,
            Field::Assignee => &mut parsed.assignee,
            Field::Status => &mut parsed.status,
        }
    }

    /// Value of this field if `rest` (the text right after a `#`) starts
    /// with one of its keys, a colon and at least one value character.
    fn match_value(self, rest: &str) -> Option<&str> {
        self.keys().iter().find_map(|key| {
            let value = rest.strip_prefix(key)?.strip_prefix(':')?;
            let len = prefix_len(value, |c| self.accepts(c));
            (len > 0).then(|| &value[..len])
        })
    }
}

/// Parse a command string into its fields and cleaned title.
pub fn parse(command: &str) -> ParsedCommand {
    let mut parsed = ParsedCommand::default();

    for (index, _) in command.match_indices('#') {
        let rest = &command[index + 1..];
        for field in Field::ALL {
            let slot = field.slot(&mut parsed);
            if !slot.is_empty() {
                continue;
            }
            if let Some(value) = field.match_value(rest) {
                *slot = value.to_string();
            }
        }
    }

    parsed.title = strip_tags(command);
    parsed
}
