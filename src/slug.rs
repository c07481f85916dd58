//! Slug normalization for board names.
//!
//! Converts arbitrary free-text topic input into a URL-safe board identifier.
//! Every function here is total: no input, however malformed, produces an
//! error or an empty slug.

/// Identifier used when normalization strips an input down to nothing.
pub const FALLBACK_SLUG: &str = "arkora";

/// Maximum length for board slugs.
pub const MAX_SLUG_LEN: usize = 30;

/// Normalize free-text input into a board slug.
///
/// Lowercases, converts whitespace and underscores to hyphens, strips every
/// character outside `[a-z0-9-]`, collapses and trims hyphens, and truncates
/// to [`MAX_SLUG_LEN`]. Falls back to [`FALLBACK_SLUG`] when nothing survives.
///
/// The result always matches `^[a-z0-9]([a-z0-9-]{0,28}[a-z0-9])?$`, and the
/// function is idempotent: normalizing a slug again returns it unchanged.
pub fn normalize(input: &str) -> String {
    let mut result = String::with_capacity(input.len().min(MAX_SLUG_LEN));
    let mut prev_hyphen = true;

    for c in input.trim().chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            prev_hyphen = false;
        } else if c == '-' || c == '_' || c.is_whitespace() {
            // Runs of separators collapse into a single hyphen; a leading
            // separator produces nothing at all.
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        }
        // Everything else (punctuation, emoji, non-ASCII letters) is dropped.
    }

    result.truncate(MAX_SLUG_LEN);

    // Truncation or a trailing separator run can leave a dangling hyphen.
    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        result
    }
}

/// Whether `s` is already a canonical slug, i.e. `normalize` would return it
/// unchanged. Used to validate user-supplied synonym tables.
pub fn is_normalized(s: &str) -> bool {
    normalize(s) == s
}
