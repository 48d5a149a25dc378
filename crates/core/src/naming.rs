//! URL slug generation for celebrity names.

/// Derive the URL-safe slug for a display name.
///
/// ASCII letters are kept (lowercased), spaces and hyphens become `-`, and
/// every other character is dropped: apostrophes, periods, digits and
/// non-ASCII letters alike. Two names that differ only in dropped characters
/// share a slug; lookups go by name, so slugs are not required to be unique.
///
/// # Examples
///
/// ```
/// use egot_core::naming::slugify;
///
/// assert_eq!(slugify("Mikey Madison"), "mikey-madison");
/// assert_eq!(slugify("J.K. Simmons"), "jk-simmons");
/// assert_eq!(slugify("Zoe Saldaña"), "zoe-saldaa");
/// ```
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            'a'..='z' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            ' ' | '-' => Some('-'),
            _ => None,
        })
        .collect()
}
