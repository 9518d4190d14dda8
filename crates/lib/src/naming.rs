//! Skill naming convention: `stitch-` followed by lowercase alphanumeric segments joined by `-`.
//!
//! Conventional shapes: `stitch-ui-<domain>-architect` for prompt architects,
//! `stitch-<framework>-components` for conversions, `stitch-mcp-<tool>` for MCP wrappers.

/// Prefix every skill name carries.
pub const SKILL_PREFIX: &str = "stitch-";

/// Example names shown when a name is rejected.
pub const NAME_EXAMPLES: &[&str] = &["stitch-ui-ecommerce-architect", "stitch-flutter-components"];

/// True when `name` matches `stitch-[a-z0-9]+(-[a-z0-9]+)*`.
pub fn is_valid_skill_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(SKILL_PREFIX) else {
        return false;
    };
    !rest.is_empty()
        && rest.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Lowercase and trim the input, then prepend `stitch-` if it is missing.
/// No other cleanup is done, so characters the pattern rejects survive and are caught later.
pub fn normalize_skill_name(input: &str) -> String {
    let name = input.trim().to_lowercase();
    if name.starts_with(SKILL_PREFIX) {
        name
    } else {
        format!("{SKILL_PREFIX}{name}")
    }
}

/// Human-readable title: `stitch-ui-ecommerce-architect` becomes `Ui Ecommerce Architect`.
pub fn skill_title(name: &str) -> String {
    let core = name.strip_prefix(SKILL_PREFIX).unwrap_or(name);
    core.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_names() {
        assert!(is_valid_skill_name("stitch-foo"));
        assert!(is_valid_skill_name("stitch-ui-ecommerce-architect"));
        assert!(is_valid_skill_name("stitch-mcp-v2"));
        assert!(is_valid_skill_name("stitch-3d"));
    }

    #[test]
    fn rejects_names_outside_the_pattern() {
        assert!(!is_valid_skill_name(""));
        assert!(!is_valid_skill_name("stitch"));
        assert!(!is_valid_skill_name("stitch-"));
        assert!(!is_valid_skill_name("foo-bar"));
        assert!(!is_valid_skill_name("Stitch-foo"));
        assert!(!is_valid_skill_name("stitch-Foo"));
        assert!(!is_valid_skill_name("stitch--foo"));
        assert!(!is_valid_skill_name("stitch-foo-"));
        assert!(!is_valid_skill_name("stitch-foo_bar"));
        assert!(!is_valid_skill_name("stitch-ecommerce architect"));
        assert!(!is_valid_skill_name("stitch-café"));
    }

    #[test]
    fn normalize_adds_prefix_and_lowercases() {
        assert_eq!(normalize_skill_name("ecommerce-architect"), "stitch-ecommerce-architect");
        assert_eq!(normalize_skill_name("  Flutter-Components "), "stitch-flutter-components");
        assert_eq!(normalize_skill_name("stitch-ui-blog-architect"), "stitch-ui-blog-architect");
        assert_eq!(normalize_skill_name("STITCH-foo"), "stitch-foo");
        assert_eq!(normalize_skill_name("Ecommerce Architect"), "stitch-ecommerce architect");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "",
            "foo",
            " Stitch-Foo ",
            "stitch-",
            "Ecommerce Architect",
            "stitch-stitch-x",
            "  -- weird__ ",
        ] {
            let once = normalize_skill_name(input);
            assert_eq!(normalize_skill_name(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn title_capitalizes_each_segment() {
        assert_eq!(skill_title("stitch-ui-ecommerce-architect"), "Ui Ecommerce Architect");
        assert_eq!(skill_title("stitch-flutter-components"), "Flutter Components");
        assert_eq!(skill_title("stitch-mcp-v2"), "Mcp V2");
        assert_eq!(skill_title("stitch-3d-x"), "3d X");
    }
}
