//! Front-matter parsing

use crate::helpers::normalize_date;

/// Line that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// Fields read from a post's front-matter block.
///
/// Everything is optional here; [`PostParser`](super::PostParser) fills in
/// defaults once the whole file has been read. Values are already cleaned:
/// `date` is normalized and `tags` is split into individual names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Result of looking for a front-matter block at the top of a file
enum Block<'a> {
    /// The file does not open with a delimiter line
    Absent,
    /// Opening delimiter without a closing one
    Unterminated,
    Found { fields: &'a str, body: &'a str },
}

/// A `key: value` line plus any list lines that followed it
struct RawField<'a> {
    key: &'a str,
    value: &'a str,
    continuation: Vec<&'a str>,
}

impl RawField<'_> {
    /// Inline value and continuation lines, one per line
    fn joined(&self) -> String {
        std::iter::once(self.value)
            .chain(self.continuation.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FrontMatter {
    /// Parse front-matter from content string.
    ///
    /// Returns the parsed fields and the remaining body. Never fails: a file
    /// without a (well-formed) block is all body, and unusable field values
    /// are dropped with a warning. `slug` is only used for diagnostics.
    pub fn parse<'a>(content: &'a str, slug: &str) -> (Self, &'a str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        match split_block(content) {
            Block::Absent => (FrontMatter::default(), content),
            Block::Unterminated => {
                tracing::warn!(
                    slug,
                    "Front-matter block is never closed, treating the whole file as content"
                );
                (FrontMatter::default(), content)
            }
            Block::Found { fields, body } => (Self::from_fields(fields, slug), body),
        }
    }

    fn from_fields(block: &str, slug: &str) -> Self {
        let mut fm = FrontMatter::default();

        for field in scan_fields(block) {
            match field.key {
                "title" => fm.title = non_empty(field.value),
                "author" => fm.author = non_empty(field.value),
                "excerpt" => fm.excerpt = non_empty(field.value),
                "date" => fm.date = parse_date_field(field.value, slug),
                "tags" => {
                    let raw = field.joined();
                    fm.tags = match parse_tags(&raw) {
                        Some(tags) => Some(tags),
                        None => {
                            tracing::warn!(slug, value = %raw.trim(), "Unparseable tags, ignoring them");
                            None
                        }
                    };
                }
                // Unknown keys are allowed so new fields don't break old builds
                _ => {}
            }
        }

        fm
    }
}

fn split_block(content: &str) -> Block<'_> {
    let Some((first, rest)) = content.split_once('\n') else {
        return if content.trim_end_matches('\r') == DELIMITER {
            Block::Unterminated
        } else {
            Block::Absent
        };
    };

    if first.trim_end_matches('\r') != DELIMITER {
        return Block::Absent;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            return Block::Found {
                fields: &rest[..offset],
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    Block::Unterminated
}

fn scan_fields(block: &str) -> Vec<RawField<'_>> {
    let mut fields: Vec<RawField<'_>> = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let in_tags = fields.last().is_some_and(|field| field.key == "tags");
        let list_item = line.starts_with(['-', '*']);

        // Split on the first colon only; the value keeps any later ones
        match line.split_once(':') {
            Some((key, value)) if !(in_tags && list_item) && is_key(key.trim()) => {
                fields.push(RawField {
                    key: key.trim(),
                    value: value.trim(),
                    continuation: Vec::new(),
                });
            }
            _ => {
                if let Some(field) = fields.last_mut() {
                    field.continuation.push(line);
                }
            }
        }
    }

    fields
}

/// Whether `key` looks like a front-matter key rather than prose
fn is_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_date_field(value: &str, slug: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let normalized = normalize_date(value);
    if normalized.is_none() {
        tracing::warn!(slug, value, "Invalid date format, using current time");
    }
    normalized
}

/// Parse a `tags` value written in any of the supported styles.
///
/// In order of precedence: a bracketed list (`[a, b]`), one tag per `-` or
/// `*` line, or a bare comma-separated string. List lines following a
/// bracketed list are appended to it. Returns `None` when the value opens a
/// bracketed list without closing it.
pub fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    if let Some(inner) = trimmed.strip_prefix('[') {
        let (bracketed, rest) = inner.split_once(']')?;
        let mut tags = split_commas(bracketed);
        tags.extend(list_items(rest));
        return Some(tags);
    }

    let listed = list_items(trimmed);

    // Retry as a comma-separated string, without the list markers
    if listed.is_empty() || (listed.len() == 1 && listed[0].contains(',')) {
        return Some(split_commas(&listed.join(",")));
    }

    Some(listed)
}

fn list_items(s: &str) -> Vec<String> {
    s.lines()
        .map(|line| {
            let line = line.trim();
            clean_tag(line.strip_prefix(['-', '*']).unwrap_or(line))
        })
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(clean_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn clean_tag(tag: &str) -> String {
    tag.trim().trim_matches(['"', '\'']).trim().to_string()
}
