//! Featured boards and display-label derivation.

/// Featured boards shipped with the app, as `(slug, display label)` pairs.
///
/// These get curated names in the board picker; anything else falls back to a
/// title-cased version of its slug.
pub const FEATURED: &[(&str, &str)] = &[
    ("arkora", "Arkora"),
    ("markets", "Markets"),
    ("worldchain", "Worldchain"),
    ("confessions", "Confessions"),
    ("tech", "Tech"),
    ("gaming", "Gaming"),
    ("memes", "Memes"),
    ("sports", "Sports"),
    ("relationships", "Relationships"),
];

/// Human-readable display name for a board slug.
///
/// Featured boards use their curated label; all others are title-cased, with
/// hyphens replaced by spaces and each word's first letter capitalized.
pub fn label(slug: &str) -> String {
    if let Some(&(_, name)) = FEATURED.iter().find(|(s, _)| *s == slug) {
        return name.to_string();
    }
    title_case(slug)
}

pub(crate) fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
