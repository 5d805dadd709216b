//! Go struct tag parsing
//!
//! A struct tag is a raw string literal of space-separated `key:"value"`
//! pairs. The parser turns one tag into an ordered key/value list queried by
//! exact key match; there is no reflection involved.
//!
//! Scanning is lenient: it stops at the first malformed pair and keeps
//! whatever parsed before it. A tag the scanner cannot read at all simply
//! yields no entries, which downstream treats as "marker absent".

/// One parsed struct tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    entries: Vec<(String, String)>,
}

impl FieldTag {
    /// Parse a raw tag literal, delimiting backticks included.
    pub fn parse(raw: &str) -> Self {
        let mut rest = strip_delimiters(raw);
        let mut entries = Vec::new();

        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }

            // Key: run of characters terminated by the `:"` opening the value.
            let Some(key_end) =
                rest.find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
            else {
                break;
            };
            if key_end == 0 || !rest[key_end..].starts_with(":\"") {
                break;
            }
            let key = &rest[..key_end];

            let Some((value, remainder)) = scan_quoted(&rest[key_end + 2..]) else {
                break;
            };
            entries.push((key.to_string(), value));
            rest = remainder;
        }

        Self { entries }
    }

    /// Raw value for `key`, first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip exactly one leading and one trailing backtick. A no-op on a string
/// that carries none, so applying it twice changes nothing.
fn strip_delimiters(raw: &str) -> &str {
    let stripped = raw.strip_prefix('`').unwrap_or(raw);
    stripped.strip_suffix('`').unwrap_or(stripped)
}

/// Consume a quoted value up to its closing quote, applying escapes.
/// Returns the unescaped value and the text after the closing quote, or
/// `None` when the value is unterminated or uses an unknown escape.
fn scan_quoted(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &input[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    _ => return None,
                });
            }
            other => value.push(other),
        }
    }
    None
}
