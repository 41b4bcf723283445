//! Small text helpers used by authoring forms: slugs, tags and hints.

/// Derive a URL slug from a title.
///
/// Lower-cases and trims, drops anything outside `[a-z0-9]`, whitespace and
/// `-`, then collapses whitespace runs and repeated dashes into one `-`.
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;

    for ch in lowered
        .trim()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
    {
        if ch.is_whitespace() || ch == '-' {
            in_separator = true;
            continue;
        }
        if in_separator {
            slug.push('-');
            in_separator = false;
        }
        slug.push(ch);
    }
    if in_separator {
        slug.push('-');
    }
    slug
}

/// Add a tag, trimmed. Blank and duplicate tags are ignored.
///
/// Returns `true` when the tag was added.
pub fn add_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Remove every tag equal to `tag`. Returns `true` when something was removed.
pub fn remove_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| t != tag);
    tags.len() != before
}

/// Trim and de-duplicate a tag list, dropping blanks. First occurrence wins.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for tag in tags {
        add_tag(&mut out, tag.as_ref());
    }
    out
}

/// Hints as they are sent: trimmed, blanks dropped, order kept.
#[must_use]
pub fn normalize_hints(hints: &[String]) -> Vec<String> {
    hints
        .iter()
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Two Sum", "two-sum")]
    #[case("  Hello,   World!  ", "hello-world")]
    #[case("a -- b", "a-b")]
    #[case("Intro: Arrays & Maps (v2)", "intro-arrays-maps-v2")]
    #[case("---", "-")]
    #[case("", "")]
    #[case("Ünïcode", "ncode")]
    fn slugify_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn tags_ignore_blanks_and_duplicates() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, " arrays "));
        assert!(!add_tag(&mut tags, "arrays"));
        assert!(!add_tag(&mut tags, "   "));
        assert!(add_tag(&mut tags, "maps"));
        assert_eq!(tags, vec!["arrays", "maps"]);

        assert!(remove_tag(&mut tags, "arrays"));
        assert!(!remove_tag(&mut tags, "arrays"));
        assert_eq!(tags, vec!["maps"]);
    }

    #[test]
    fn normalize_tags_keeps_first_occurrence() {
        assert_eq!(normalize_tags(["b", " a", "b ", ""]), vec!["b", "a"]);
    }

    #[test]
    fn hints_are_trimmed_and_blanks_dropped() {
        let hints = vec!["  first ".to_string(), "   ".to_string(), "second".to_string()];
        assert_eq!(normalize_hints(&hints), vec!["first", "second"]);
    }
}
