/// Whitespace as title text is split on: Unicode `White_Space` plus the
/// byte order mark, minus NEL (U+0085).
fn is_separator_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Derives the URL identifier of an event from its title.
///
/// Lowercases and trims the title, drops everything except ASCII letters,
/// digits, whitespace and hyphens, then joins the remaining words with a
/// single hyphen. Never fails; a title with no usable characters yields an
/// empty slug.
pub fn generate_slug(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .trim_matches(is_separator_space)
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || is_separator_space(*c)
                || *c == '-'
        })
        .collect();

    kept.split(|c: char| is_separator_space(c) || c == '-')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Shape accepted for slug lookups: one or more of `[a-z0-9-]`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
