//! Frontmatter of SKILL.md: a leading `---` block of `key: value` lines followed by markdown.
//!
//! Extraction is a single line scan rather than a YAML parse. List items (e.g. the entries of
//! `allowed-tools`) and blank lines are skipped; every other line is split on its first `:`.

use std::collections::BTreeMap;
use std::path::Path;

const DELIMITER: &str = "---";

/// Raw pieces of a document whose first line opens a frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the opening and closing delimiter lines (no surrounding line breaks).
    pub interior: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

/// Flat key/value mapping extracted from a frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// True when `line` (including its line break, if any) is a delimiter line.
/// Trailing whitespace is tolerated so CRLF documents parse too.
fn is_delimiter(line: &str) -> bool {
    line.starts_with(DELIMITER) && line.trim_end() == DELIMITER
}

/// Locate the frontmatter block. The document must open with a delimiter line, and the block
/// closes at the first later delimiter line that is itself followed by a line break.
pub fn split(text: &str) -> Option<Block<'_>> {
    let mut lines = text.split_inclusive('\n');
    let open = lines.next()?;
    if !open.ends_with('\n') || !is_delimiter(open) {
        return None;
    }

    let interior_start = open.len();
    let mut offset = interior_start;
    for line in lines {
        if is_delimiter(line) && line.ends_with('\n') {
            let interior = text[interior_start..offset]
                .strip_suffix('\n')
                .map(|s| s.strip_suffix('\r').unwrap_or(s))
                .unwrap_or("");
            return Some(Block {
                interior,
                body: &text[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

/// Parse the frontmatter of a document. `None` means there is no well-formed block at the start.
pub fn parse(text: &str) -> Option<Frontmatter> {
    let block = split(text)?;
    let mut fields = BTreeMap::new();
    for line in block.interior.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Some(Frontmatter { fields })
}

/// Read a file and parse its frontmatter. I/O failures (missing file, invalid UTF-8) are returned.
pub fn parse_file(path: &Path) -> std::io::Result<Option<Frontmatter>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_description() {
        let doc = "---\nname: stitch-foo\ndescription: Does a thing.\n---\nBody text.\n";
        let fm = parse(doc).expect("frontmatter");
        assert_eq!(fm.get("name"), Some("stitch-foo"));
        assert_eq!(fm.get("description"), Some("Does a thing."));
        assert_eq!(fm.len(), 2);
        assert_eq!(split(doc).map(|b| b.body), Some("Body text.\n"));
    }

    #[test]
    fn skips_list_items_and_blank_lines() {
        let doc = "---\nname: stitch-foo\n\nallowed-tools:\n  - \"Read\"\n  - \"Write\"\n---\n";
        let fm = parse(doc).expect("frontmatter");
        assert_eq!(fm.get("allowed-tools"), Some(""));
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let fm = parse("---\ndescription: Use when: the user says so\n---\n").expect("frontmatter");
        assert_eq!(fm.get("description"), Some("Use when: the user says so"));
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let fm = parse("---\nname: first\nname: second\n---\n").expect("frontmatter");
        assert_eq!(fm.get("name"), Some("second"));
        assert_eq!(fm.len(), 1);
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let fm = parse("---\njust words\nname: x\n---\n").expect("frontmatter");
        assert_eq!(fm.iter().collect::<Vec<_>>(), vec![("name", "x")]);
    }

    #[test]
    fn missing_block_is_none() {
        assert!(parse("# Title\n\nNo frontmatter here.").is_none());
        assert!(parse("").is_none());
        assert!(parse("\n---\nname: x\n---\n").is_none());
        assert!(parse(" ---\nname: x\n---\n").is_none());
    }

    #[test]
    fn unterminated_block_is_none() {
        assert!(parse("---\nname: x\n").is_none());
        // The closing delimiter must be followed by a line break.
        assert!(parse("---\nname: x\n---").is_none());
        assert!(parse("---\nname: x\n----\n").is_none());
    }

    #[test]
    fn empty_block_parses_to_empty_mapping() {
        let fm = parse("---\n---\nbody").expect("frontmatter");
        assert!(fm.is_empty());
    }

    #[test]
    fn closes_at_first_delimiter() {
        let doc = "---\nname: a\n---\n\ntext\n\n---\nname: b\n---\n";
        let fm = parse(doc).expect("frontmatter");
        assert_eq!(fm.get("name"), Some("a"));
        assert!(split(doc).expect("block").body.contains("name: b"));
    }

    #[test]
    fn tolerates_crlf_and_trailing_whitespace_on_delimiters() {
        let doc = "---  \r\nname: stitch-foo\r\ndescription: d\r\n---\r\nbody\r\n";
        let fm = parse(doc).expect("frontmatter");
        assert_eq!(fm.get("name"), Some("stitch-foo"));
        assert_eq!(fm.get("description"), Some("d"));
        assert_eq!(split(doc).expect("block").interior, "name: stitch-foo\r\ndescription: d");
    }

    #[test]
    fn reparsing_reconstructed_block_is_stable() {
        let docs = [
            "---\nname: stitch-foo\ndescription: Does a thing.\n---\nBody text.\n",
            "---\nname: a\nname: b\nallowed-tools:\n  - Read\nkey:value:more\n---\n",
            "---\n---\n",
        ];
        for doc in docs {
            let block = split(doc).expect("block");
            let first = parse(doc).expect("frontmatter");
            let rebuilt = format!("---\n{}\n---\n", block.interior);
            assert_eq!(parse(&rebuilt), Some(first), "doc: {doc:?}");
        }
    }
}
